// ============================================================================
// SIGN IN - Email/contraseña + Google/GitHub
// ============================================================================

use web_sys::UrlSearchParams;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::models::{AuthUser, OAuthProvider};
use crate::routes::Route;
use crate::services::AuthError;
use crate::state::SessionManager;
use crate::viewmodels::RedirectQuery;
use crate::views::form_input::event_value;

#[derive(Clone, Debug, PartialEq)]
enum SignInMethod {
    Password { email: String, password: String },
    Popup(OAuthProvider),
}

async fn sign_in(manager: &SessionManager, method: SignInMethod) -> Result<AuthUser, AuthError> {
    match method {
        SignInMethod::Password { email, password } => manager.sign_in_with_password(&email, &password).await,
        SignInMethod::Popup(OAuthProvider::Google) => manager.sign_in_with_google().await,
        SignInMethod::Popup(OAuthProvider::Github) => manager.sign_in_with_github().await,
    }
}

/// Ruta a la que volver tras iniciar sesión (`?from=`) y su query string
fn redirect_route(query: RedirectQuery) -> (Route, String) {
    let (path, query) = query.target_parts();
    match Route::recognize(&path) {
        Some(route) => (route, query),
        None => (Route::Home, String::new()),
    }
}

/// Pares clave/valor decodificados por el navegador (URLSearchParams)
fn query_pairs(query: &str) -> Vec<(String, String)> {
    let params = match UrlSearchParams::new_with_str(query) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("⚠️ [SIGNIN] Query string inválida {:?}: {:?}", query, e);
            return Vec::new();
        }
    };
    let entries = match js_sys::try_iter(params.as_ref()) {
        Ok(Some(entries)) => entries,
        _ => return Vec::new(),
    };
    entries
        .filter_map(Result::ok)
        .map(|val| js_sys::Array::from(&val))
        .filter_map(|pair| Some((pair.get(0).as_string()?, pair.get(1).as_string()?)))
        .collect()
}

fn return_to(navigator: &Navigator, route: &Route, query: &str) {
    if query.is_empty() {
        navigator.replace(route);
    } else if let Err(e) = navigator.replace_with_query(route, &query_pairs(query)) {
        log::error!("❌ [SIGNIN] Error volviendo a {:?}: {:?}", route, e);
        navigator.replace(route);
    }
}

#[function_component(SignInView)]
pub fn sign_in_view() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let location = use_location();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    let (target, target_query) = redirect_route(
        location
            .and_then(|location| location.query::<RedirectQuery>().ok())
            .unwrap_or_default(),
    );

    let run = {
        let error = error.clone();
        let busy = busy.clone();
        let manager = session.manager.clone();
        Callback::from(move |method: SignInMethod| {
            let error = error.clone();
            let busy = busy.clone();
            let manager = manager.clone();
            let navigator = navigator.clone();
            let target = target.clone();
            let target_query = target_query.clone();
            error.set(None);
            busy.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match sign_in(&manager, method).await {
                    Ok(user) => {
                        log::info!("✅ [SIGNIN] {}", user.label());
                        if let Some(navigator) = navigator {
                            return_to(&navigator, &target, &target_query);
                        }
                    }
                    Err(e) => {
                        log::warn!("⚠️ [SIGNIN] {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let run = run.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            run.emit(SignInMethod::Password {
                email: (*email).clone(),
                password: (*password).clone(),
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(event_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(event_value(&e)))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-container">
                <h1>{"Sign in"}</h1>
                if let Some(message) = &*error {
                    <p class="form-error">{message.clone()}</p>
                }
                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input id="email" type="email" required=true value={(*email).clone()} oninput={on_email} />
                    </div>
                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input id="password" type="password" required=true value={(*password).clone()} oninput={on_password} />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled={*busy}>{"Sign in"}</button>
                </form>
                <div class="oauth-buttons">
                    <button class="btn btn-outline" disabled={*busy}
                        onclick={run.reform(|_: MouseEvent| SignInMethod::Popup(OAuthProvider::Google))}>
                        {"Continue with Google"}
                    </button>
                    <button class="btn btn-outline" disabled={*busy}
                        onclick={run.reform(|_: MouseEvent| SignInMethod::Popup(OAuthProvider::Github))}>
                        {"Continue with GitHub"}
                    </button>
                </div>
                <p class="auth-switch">
                    {"New here? "}
                    <Link<Route> to={Route::SignUp}>{"Create an account"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_returns_to_requested_route() {
        assert_eq!(
            redirect_route(RedirectQuery::new("/details/42")),
            (Route::AssignmentDetails { id: "42".into() }, String::new())
        );
        assert_eq!(redirect_route(RedirectQuery::default()), (Route::Home, String::new()));
        assert_eq!(
            redirect_route(RedirectQuery::new("https://evil.dev")),
            (Route::Home, String::new())
        );
    }

    #[test]
    fn redirect_keeps_the_requested_query() {
        assert_eq!(
            redirect_route(RedirectQuery::new("/submited?page=2")),
            (Route::SubmitedAssignment, "page=2".to_string())
        );
        assert_eq!(
            redirect_route(RedirectQuery::new("//evil.dev?page=2")),
            (Route::Home, String::new())
        );
    }
}
