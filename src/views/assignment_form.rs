use yew::prelude::*;

use crate::models::LEVELS;
use crate::viewmodels::AssignmentForm;
use crate::views::form_input::{bind_change, bind_field};

#[derive(Properties, PartialEq)]
pub struct AssignmentFormProps {
    pub form: UseStateHandle<AssignmentForm>,
    pub submit_label: AttrValue,
    pub busy: bool,
    pub on_submit: Callback<()>,
}

/// Formulario compartido por /create y /update/:id
#[function_component(AssignmentFormFields)]
pub fn assignment_form_fields(props: &AssignmentFormProps) -> Html {
    let form = &props.form;
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="assignment-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="title">{"Title"}</label>
                <input id="title" type="text" value={form.title.clone()}
                    oninput={bind_field(form, |f, v| f.title = v)} />
            </div>
            <div class="form-group">
                <label for="description">{"Description"}</label>
                <textarea id="description" rows="4" value={form.description.clone()}
                    oninput={bind_field(form, |f, v| f.description = v)} />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="marks">{"Marks"}</label>
                    <input id="marks" type="number" min="1" value={form.marks.clone()}
                        oninput={bind_field(form, |f, v| f.marks = v)} />
                </div>
                <div class="form-group">
                    <label for="level">{"Level"}</label>
                    <select id="level" onchange={bind_change(form, |f, v| f.level = v)}>
                        { for LEVELS.iter().map(|level| html! {
                            <option value={*level} selected={form.level == *level}>{*level}</option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for="due-date">{"Due date"}</label>
                    <input id="due-date" type="date" value={form.due_date.clone()}
                        oninput={bind_field(form, |f, v| f.due_date = v)} />
                </div>
            </div>
            <div class="form-group">
                <label for="thumbnail">{"Thumbnail URL"}</label>
                <input id="thumbnail" type="url" value={form.thumbnail.clone()}
                    oninput={bind_field(form, |f, v| f.thumbnail = v)} />
            </div>
            <button type="submit" class="btn btn-primary" disabled={props.busy}>{props.submit_label.clone()}</button>
        </form>
    }
}
