use yew::prelude::*;

use crate::viewmodels::PaginationModel;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub model: PaginationModel,
    pub on_select: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let model = &props.model;
    let go_to = |page: u32| props.on_select.reform(move |_: MouseEvent| page);

    html! {
        <nav class="pagination">
            <button class="page-btn" disabled={!model.has_previous()}
                onclick={go_to(model.current.saturating_sub(1).max(1))}>{"‹"}</button>
            { for model.pages().into_iter().map(|page| html! {
                <button
                    key={page}
                    class={classes!("page-btn", (page == model.current).then_some("active"))}
                    onclick={go_to(page)}
                >
                    {page}
                </button>
            }) }
            <button class="page-btn" disabled={!model.has_next()}
                onclick={go_to(model.current + 1)}>{"›"}</button>
        </nav>
    }
}
