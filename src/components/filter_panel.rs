use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::LEVELS;

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub level: String,
    pub descending: bool,
    pub on_level: Callback<String>,
    pub on_sort: Callback<bool>,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let on_level_change = {
        let on_level = props.on_level.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_level.emit(select.value());
        })
    };

    let on_sort_change = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_sort.emit(input.checked());
        })
    };

    html! {
        <aside class="filter-panel">
            <div class="form-group">
                <label for="level">{"Level"}</label>
                <select id="level" onchange={on_level_change}>
                    <option value="" selected={props.level.is_empty()}>{"All levels"}</option>
                    { for LEVELS.iter().map(|level| html! {
                        <option value={*level} selected={props.level == *level}>{*level}</option>
                    }) }
                </select>
            </div>
            <label class="toggle">
                <input type="checkbox" checked={props.descending} onchange={on_sort_change} />
                <span>{"Newest due date first"}</span>
            </label>
        </aside>
    }
}
