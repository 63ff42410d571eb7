use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Flash, FlashMessage};
use crate::hooks::{use_query, use_query_clients, use_session};
use crate::models::Assignment;
use crate::routes::Route;
use crate::services::AssignmentService;
use crate::state::QueryState;
use crate::viewmodels::AssignmentForm;
use crate::views::assignment_form::AssignmentFormFields;
use crate::views::query_status;

#[derive(Properties, PartialEq)]
pub struct UpdateAssignmentProps {
    pub id: String,
}

#[function_component(UpdateAssignmentView)]
pub fn update_assignment_view(props: &UpdateAssignmentProps) -> Html {
    let session = use_session();
    let clients = use_query_clients();
    let state = use_query(clients.assignment.clone(), props.id.clone(), |id| async move {
        AssignmentService::default().get(&id).await
    });

    match state {
        QueryState::Loading => query_status::loading(),
        QueryState::Error(e) => query_status::failed("Assignment", &e),
        QueryState::Success(assignment) if !assignment.is_created_by(session.snapshot.email()) => html! {
            <section class="page">
                <p class="error-state">{"Only the creator can update this assignment."}</p>
            </section>
        },
        QueryState::Success(assignment) => html! {
            <UpdateForm assignment={(*assignment).clone()} />
        },
    }
}

#[derive(Properties, PartialEq)]
struct UpdateFormProps {
    assignment: Assignment,
}

#[function_component(UpdateForm)]
fn update_form(props: &UpdateFormProps) -> Html {
    let session = use_session();
    let clients = use_query_clients();
    let navigator = use_navigator();
    let form = use_state(|| AssignmentForm::from_assignment(&props.assignment));
    let flash = use_state(|| None::<Flash>);
    let busy = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let flash = flash.clone();
        let busy = busy.clone();
        let id = props.assignment.id.clone();
        let user = session.snapshot.user.clone();
        Callback::from(move |_: ()| {
            let Some(user) = user.as_ref() else {
                return;
            };
            let body = match form.validate(user) {
                Ok(body) => body,
                Err(e) => {
                    flash.set(Some(Flash::error(e.to_string())));
                    return;
                }
            };

            let id = id.clone();
            let flash = flash.clone();
            let busy = busy.clone();
            let clients = clients.clone();
            let navigator = navigator.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match AssignmentService::default().update(&id, &body).await {
                    Ok(_) => {
                        clients.assignment_changed(Some(&id));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Assignments);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ [ASSIGNMENTS] Error actualizando {}: {}", id, e);
                        flash.set(Some(Flash::error("Could not update the assignment")));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_dismiss = {
        let flash = flash.clone();
        Callback::from(move |_: ()| flash.set(None))
    };

    html! {
        <section class="page">
            <h1>{format!("Update \"{}\"", props.assignment.title)}</h1>
            <FlashMessage flash={(*flash).clone()} on_dismiss={on_dismiss} />
            <AssignmentFormFields form={form} submit_label="Save changes" busy={*busy} on_submit={on_submit} />
        </section>
    }
}
