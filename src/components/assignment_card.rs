use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_query_clients, use_session};
use crate::models::Assignment;
use crate::routes::Route;
use crate::services::AssignmentService;

#[derive(Properties, PartialEq)]
pub struct AssignmentCardProps {
    pub assignment: Assignment,
}

#[function_component(AssignmentCard)]
pub fn assignment_card(props: &AssignmentCardProps) -> Html {
    let session = use_session();
    let clients = use_query_clients();
    let deleting = use_state(|| false);
    let a = &props.assignment;

    let is_creator = a.is_created_by(session.snapshot.email());

    let on_delete = {
        let id = a.id.clone();
        let title = a.title.clone();
        let email = session.snapshot.email().map(str::to_string);
        let deleting = deleting.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(email) = email.clone() else {
                return;
            };
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&format!("Delete \"{}\"?", title)).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let id = id.clone();
            let clients = clients.clone();
            let deleting = deleting.clone();
            deleting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match AssignmentService::default().delete(&id, &email).await {
                    Ok(result) if result.deleted() => {
                        log::info!("✅ [ASSIGNMENTS] Tarea {} borrada", id);
                        clients.assignment_changed(Some(&id));
                    }
                    Ok(_) => log::warn!("⚠️ [ASSIGNMENTS] El backend no borró {}", id),
                    Err(e) => log::error!("❌ [ASSIGNMENTS] Error borrando {}: {}", id, e),
                }
                deleting.set(false);
            });
        })
    };

    html! {
        <article class="assignment-card">
            <img class="assignment-thumb" src={a.thumbnail.clone()} alt={a.title.clone()} />
            <div class="assignment-body">
                <h3>{a.title.clone()}</h3>
                <div class="assignment-meta">
                    <span class={classes!("level-badge", format!("level-{}", a.level))}>{a.level.clone()}</span>
                    <span class="marks">{format!("{} marks", a.marks)}</span>
                </div>
                <p class="due-date">{format!("Due {}", a.due_date_label())}</p>
            </div>
            <div class="assignment-actions">
                <Link<Route> classes="btn" to={Route::AssignmentDetails { id: a.id.clone() }}>{"View"}</Link<Route>>
                if is_creator {
                    <Link<Route> classes="btn btn-outline" to={Route::UpdateAssignment { id: a.id.clone() }}>{"Update"}</Link<Route>>
                    <button class="btn btn-danger" onclick={on_delete} disabled={*deleting}>{"Delete"}</button>
                }
            </div>
        </article>
    }
}
