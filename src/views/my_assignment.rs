use yew::prelude::*;

use crate::hooks::{use_query, use_query_clients, use_session};
use crate::models::{SubmissionFilter, SubmissionStatus};
use crate::services::SubmissionService;
use crate::state::QueryState;
use crate::views::query_status;

/// Entregas del usuario actual con su nota y feedback
#[function_component(MyAssignmentView)]
pub fn my_assignment_view() -> Html {
    let session = use_session();
    let clients = use_query_clients();
    let email = session.snapshot.email().unwrap_or_default().to_string();
    let state = use_query(
        clients.submissions.clone(),
        SubmissionFilter::ByExaminee(email),
        |filter| async move { SubmissionService::default().list(&filter).await },
    );

    let body = match state {
        QueryState::Loading => query_status::loading(),
        QueryState::Error(e) => query_status::failed("Submissions", &e),
        QueryState::Success(submissions) if submissions.is_empty() => html! {
            <p class="empty-state">{"You have not submitted any assignment yet."}</p>
        },
        QueryState::Success(submissions) => html! {
            <table class="submissions-table">
                <thead>
                    <tr>
                        <th>{"Assignment"}</th>
                        <th>{"Status"}</th>
                        <th>{"Score"}</th>
                        <th>{"Feedback"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for submissions.iter().map(|submission| html! {
                        <tr key={submission.id.clone()}>
                            <td>{submission.title.clone()}</td>
                            <td>
                                <span class={classes!("status-badge", submission.status.as_str())}>
                                    {submission.status.as_str()}
                                </span>
                            </td>
                            <td>{submission.score_label()}</td>
                            <td>
                                {
                                    match (&submission.status, &submission.feedback) {
                                        (SubmissionStatus::Completed, Some(feedback)) => feedback.clone(),
                                        _ => "—".to_string(),
                                    }
                                }
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <section class="page">
            <h1>{"My submissions"}</h1>
            {body}
        </section>
    }
}
