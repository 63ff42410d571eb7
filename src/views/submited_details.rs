// ============================================================================
// SUBMITED DETAILS - Corregir una entrega
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Flash, FlashMessage};
use crate::hooks::{use_query, use_query_clients, use_session};
use crate::models::Submission;
use crate::routes::Route;
use crate::services::SubmissionService;
use crate::state::QueryState;
use crate::viewmodels::GradeForm;
use crate::views::form_input::bind_field;
use crate::views::query_status;

#[derive(Properties, PartialEq)]
pub struct SubmitedDetailsProps {
    pub id: String,
}

#[function_component(SubmitedDetailsView)]
pub fn submited_details_view(props: &SubmitedDetailsProps) -> Html {
    let clients = use_query_clients();
    let state = use_query(clients.submission.clone(), props.id.clone(), |id| async move {
        SubmissionService::default().get(&id).await
    });

    match state {
        QueryState::Loading => query_status::loading(),
        QueryState::Error(e) => query_status::failed("Submission", &e),
        QueryState::Success(submission) => html! {
            <section class="page submission-details">
                <h1>{submission.title.clone()}</h1>
                <p class="examinee">{format!("Submitted by {} ({})", submission.examinee.name, submission.examinee.email)}</p>
                <p>
                    <a href={submission.pdf_link.clone()} target="_blank" rel="noopener noreferrer">{"Open PDF"}</a>
                </p>
                if !submission.note.is_empty() {
                    <blockquote class="note">{submission.note.clone()}</blockquote>
                }
                <GradeSubmissionForm submission={(*submission).clone()} />
            </section>
        },
    }
}

#[derive(Properties, PartialEq)]
struct GradeSubmissionProps {
    submission: Submission,
}

#[function_component(GradeSubmissionForm)]
fn grade_submission_form(props: &GradeSubmissionProps) -> Html {
    let session = use_session();
    let clients = use_query_clients();
    let navigator = use_navigator();
    let form = use_state(GradeForm::default);
    let flash = use_state(|| None::<Flash>);
    let busy = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let flash = flash.clone();
        let busy = busy.clone();
        let submission = props.submission.clone();
        let grader = session.snapshot.email().map(str::to_string);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let grade = match form.validate(&submission, grader.as_deref()) {
                Ok(grade) => grade,
                Err(e) => {
                    flash.set(Some(Flash::error(e.to_string())));
                    return;
                }
            };

            let id = submission.id.clone();
            let flash = flash.clone();
            let busy = busy.clone();
            let clients = clients.clone();
            let navigator = navigator.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match SubmissionService::default().grade(&id, &grade).await {
                    Ok(_) => {
                        clients.submission_changed(Some(&id));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::SubmitedAssignment);
                        }
                    }
                    Err(e) => {
                        log::error!("❌ [SUBMISSIONS] Error corrigiendo {}: {}", id, e);
                        flash.set(Some(Flash::error("Could not save the mark")));
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
        <form class="grade-form" onsubmit={on_submit}>
            <h2>{format!("Mark out of {}", props.submission.marks)}</h2>
            <FlashMessage flash={(*flash).clone()} on_dismiss={on_dismiss} />
            <div class="form-group">
                <label for="obtained">{"Obtained marks"}</label>
                <input id="obtained" type="number" min="0" max={props.submission.marks.to_string()}
                    value={form.obtained_marks.clone()}
                    oninput={bind_field(&form, |f, v| f.obtained_marks = v)} />
            </div>
            <div class="form-group">
                <label for="feedback">{"Feedback"}</label>
                <textarea id="feedback" rows="4"
                    value={form.feedback.clone()}
                    oninput={bind_field(&form, |f, v| f.feedback = v)} />
            </div>
            <button type="submit" class="btn btn-primary" disabled={*busy}>{"Give mark"}</button>
        </form>
    }
}
