use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Flash, FlashMessage};
use crate::hooks::{use_query_clients, use_session};
use crate::routes::Route;
use crate::services::AssignmentService;
use crate::viewmodels::AssignmentForm;
use crate::views::assignment_form::AssignmentFormFields;

#[function_component(CreateAssignmentView)]
pub fn create_assignment_view() -> Html {
    let session = use_session();
    let clients = use_query_clients();
    let navigator = use_navigator();
    let form = use_state(AssignmentForm::new);
    let flash = use_state(|| None::<Flash>);
    let busy = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let flash = flash.clone();
        let busy = busy.clone();
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

            let flash = flash.clone();
            let busy = busy.clone();
            let clients = clients.clone();
            let navigator = navigator.clone();
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match AssignmentService::default().create(&body).await {
                    Ok(result) if result.inserted() => {
                        clients.assignment_changed(None);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Assignments);
                        }
                    }
                    Ok(_) => flash.set(Some(Flash::error("The assignment was not created"))),
                    Err(e) => {
                        log::error!("❌ [ASSIGNMENTS] Error creando tarea: {}", e);
                        flash.set(Some(Flash::error("Could not create the assignment")));
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
            <h1>{"Create assignment"}</h1>
            <FlashMessage flash={(*flash).clone()} on_dismiss={on_dismiss} />
            <AssignmentFormFields form={form} submit_label="Create" busy={*busy} on_submit={on_submit} />
        </section>
    }
}
