use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_query, use_query_clients};
use crate::models::SubmissionFilter;
use crate::routes::Route;
use crate::services::SubmissionService;
use crate::state::QueryState;
use crate::views::query_status;

/// Entregas pendientes de corregir
#[function_component(SubmitedAssignmentView)]
pub fn submited_assignment_view() -> Html {
    let clients = use_query_clients();
    let state = use_query(
        clients.submissions.clone(),
        SubmissionFilter::Pending,
        |filter| async move { SubmissionService::default().list(&filter).await },
    );

    let body = match state {
        QueryState::Loading => query_status::loading(),
        QueryState::Error(e) => query_status::failed("Submissions", &e),
        QueryState::Success(submissions) if submissions.is_empty() => html! {
            <p class="empty-state">{"No submissions are waiting for a mark."}</p>
        },
        QueryState::Success(submissions) => html! {
            <table class="submissions-table">
                <thead>
                    <tr>
                        <th>{"Assignment"}</th>
                        <th>{"Examinee"}</th>
                        <th>{"Marks"}</th>
                        <th />
                    </tr>
                </thead>
                <tbody>
                    { for submissions.iter().map(|submission| html! {
                        <tr key={submission.id.clone()}>
                            <td>{submission.title.clone()}</td>
                            <td>{submission.examinee.name.clone()}</td>
                            <td>{submission.marks}</td>
                            <td>
                                <Link<Route> classes="btn" to={Route::SubmitedDetails { id: submission.id.clone() }}>
                                    {"Give mark"}
                                </Link<Route>>
                            </td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };

    html! {
        <section class="page">
            <h1>{"Pending submissions"}</h1>
            {body}
        </section>
    }
}
