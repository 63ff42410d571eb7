use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routes::Route;
use crate::services::AuthError;
use crate::state::SessionManager;
use crate::viewmodels::SignUpForm;
use crate::views::form_input::bind_field;

/// Alta + perfil (nombre y foto) en un solo paso
async fn register(manager: &SessionManager, form: &SignUpForm) -> Result<(), AuthError> {
    manager
        .sign_up_with_password(form.email.trim(), &form.password)
        .await?;
    manager
        .update_profile(form.display_name(), form.photo_url())
        .await
}

#[function_component(SignUpView)]
pub fn sign_up_view() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let form = use_state(SignUpForm::default);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        let manager = session.manager.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            let form = (*form).clone();
            let error = error.clone();
            let busy = busy.clone();
            let manager = manager.clone();
            let navigator = navigator.clone();
            error.set(None);
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match register(&manager, &form).await {
                    Ok(()) => {
                        log::info!("✅ [SIGNUP] Cuenta creada: {}", form.email);
                        if let Some(navigator) = navigator {
                            navigator.replace(&Route::Home);
                        }
                    }
                    Err(e) => {
                        log::warn!("⚠️ [SIGNUP] {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{"Create an account"}</h1>
                if let Some(message) = &*error {
                    <p class="form-error">{message.clone()}</p>
                }
                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="name">{"Name"}</label>
                        <input id="name" type="text" value={form.name.clone()}
                            oninput={bind_field(&form, |f, v| f.name = v)} />
                    </div>
                    <div class="form-group">
                        <label for="photo">{"Photo URL"}</label>
                        <input id="photo" type="url" value={form.photo_url.clone()}
                            oninput={bind_field(&form, |f, v| f.photo_url = v)} />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" required=true value={form.email.clone()}
                            oninput={bind_field(&form, |f, v| f.email = v)} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password" required=true value={form.password.clone()}
                            oninput={bind_field(&form, |f, v| f.password = v)} />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*busy}>{"Sign up"}</button>
                </form>
                <p class="auth-switch">
                    {"Already have an account? "}
                    <Link<Route> to={Route::SignIn}>{"Sign in"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
