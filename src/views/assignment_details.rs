// ============================================================================
// ASSIGNMENT DETAILS - Ver una tarea y entregar la solución
// ============================================================================

use chrono::Utc;
use yew::prelude::*;

use crate::components::{Flash, FlashMessage};
use crate::hooks::{use_query, use_query_clients, use_session};
use crate::models::Assignment;
use crate::services::{AssignmentService, SubmissionService};
use crate::state::QueryState;
use crate::viewmodels::SubmissionForm;
use crate::views::form_input::bind_field;
use crate::views::query_status;

#[derive(Properties, PartialEq)]
pub struct AssignmentDetailsProps {
    pub id: String,
}

#[function_component(AssignmentDetailsView)]
pub fn assignment_details_view(props: &AssignmentDetailsProps) -> Html {
    let clients = use_query_clients();
    let state = use_query(clients.assignment.clone(), props.id.clone(), |id| async move {
        AssignmentService::default().get(&id).await
    });

    match state {
        QueryState::Loading => query_status::loading(),
        QueryState::Error(e) => query_status::failed("Assignment", &e),
        QueryState::Success(assignment) => html! {
            <section class="page assignment-details">
                <img class="details-thumb" src={assignment.thumbnail.clone()} alt={assignment.title.clone()} />
                <h1>{assignment.title.clone()}</h1>
                <div class="assignment-meta">
                    <span class={classes!("level-badge", format!("level-{}", assignment.level))}>{assignment.level.clone()}</span>
                    <span class="marks">{format!("{} marks", assignment.marks)}</span>
                    <span class="due-date">{format!("Due {}", assignment.due_date_label())}</span>
                </div>
                <p class="description">{assignment.description.clone()}</p>
                <p class="creator">{format!("Created by {}", assignment.creator.name)}</p>
                <TakeAssignmentForm assignment={(*assignment).clone()} />
            </section>
        },
    }
}

#[derive(Properties, PartialEq)]
struct TakeAssignmentProps {
    assignment: Assignment,
}

#[function_component(TakeAssignmentForm)]
fn take_assignment_form(props: &TakeAssignmentProps) -> Html {
    let session = use_session();
    let clients = use_query_clients();
    let form = use_state(SubmissionForm::default);
    let flash = use_state(|| None::<Flash>);
    let submitting = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let flash = flash.clone();
        let submitting = submitting.clone();
        let assignment = props.assignment.clone();
        let user = session.snapshot.user.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(user) = user.as_ref() else {
                flash.set(Some(Flash::error("You must be signed in")));
                return;
            };
            let body = match form.validate(&assignment, user, Utc::now()) {
                Ok(body) => body,
                Err(e) => {
                    flash.set(Some(Flash::error(e.to_string())));
                    return;
                }
            };

            let form = form.clone();
            let flash = flash.clone();
            let submitting = submitting.clone();
            let clients = clients.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match SubmissionService::default().submit(&body).await {
                    Ok(result) if result.inserted() => {
                        log::info!("✅ [SUBMISSIONS] Entrega creada para {}", body.assignment_id);
                        clients.submission_changed(None);
                        form.set(SubmissionForm::default());
                        flash.set(Some(Flash::success("Assignment submitted")));
                    }
                    Ok(_) => flash.set(Some(Flash::error("The submission was not saved"))),
                    Err(e) => {
                        log::error!("❌ [SUBMISSIONS] Error entregando: {}", e);
                        flash.set(Some(Flash::error("Could not submit the assignment")));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_dismiss = {
        let flash = flash.clone();
        Callback::from(move |_: ()| flash.set(None))
    };

    html! {
        <form class="take-assignment" onsubmit={on_submit}>
            <h2>{"Take assignment"}</h2>
            <FlashMessage flash={(*flash).clone()} on_dismiss={on_dismiss} />
            <div class="form-group">
                <label for="pdf-link">{"PDF link"}</label>
                <input id="pdf-link" type="url" placeholder="https://..."
                    value={form.pdf_link.clone()}
                    oninput={bind_field(&form, |f, v| f.pdf_link = v)} />
            </div>
            <div class="form-group">
                <label for="note">{"Quick note"}</label>
                <textarea id="note" rows="3"
                    value={form.note.clone()}
                    oninput={bind_field(&form, |f, v| f.note = v)} />
            </div>
            <button type="submit" class="btn btn-primary" disabled={*submitting}>{"Submit"}</button>
        </form>
    }
}
