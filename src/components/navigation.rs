// ============================================================================
// NAVIGATION - Barra superior
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{use_query_clients, use_session};
use crate::routes::Route;
use crate::utils::constants::{APP_NAME, SIDEBAR_BREAKPOINT_PX};

/// En pantallas anchas los enlaces ya están en la barra: el menú sobra
fn sidebar_fits_inline(width: f64) -> bool {
    width >= SIDEBAR_BREAKPOINT_PX
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let session = use_session();
    let clients = use_query_clients();
    let menu_open = use_state(|| false);

    // Listener de resize en window; se elimina al desmontar
    {
        let menu_open = menu_open.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new({
                    let window = window.clone();
                    move |_: web_sys::Event| {
                        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                        if sidebar_fits_inline(width) {
                            menu_open.set(false);
                        }
                    }
                });
                if let Err(e) = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref()) {
                    log::warn!("⚠️ [NAV] No se pudo registrar resize: {:?}", e);
                }
                (window, on_resize)
            });

            move || {
                if let Some((window, on_resize)) = listener {
                    let _ = window.remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                }
            }
        });
    }

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let on_sign_out = {
        let manager = session.manager.clone();
        Callback::from(move |_: MouseEvent| {
            let manager = manager.clone();
            let clients = clients.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match manager.sign_out().await {
                    // Las entregas dependen del usuario
                    Ok(()) => clients.submission_changed(None),
                    Err(e) => log::error!("❌ [NAV] Error cerrando sesión: {}", e),
                }
            });
        })
    };

    let links = html! {
        <>
            <Link<Route> classes="nav-link" to={Route::Home}>{"Home"}</Link<Route>>
            <Link<Route> classes="nav-link" to={Route::Assignments}>{"Assignments"}</Link<Route>>
            <Link<Route> classes="nav-link" to={Route::CreateAssignment}>{"Create"}</Link<Route>>
            <Link<Route> classes="nav-link" to={Route::MyAssignment}>{"My submissions"}</Link<Route>>
            <Link<Route> classes="nav-link" to={Route::SubmitedAssignment}>{"Pending"}</Link<Route>>
        </>
    };

    let account = match &session.snapshot.user {
        Some(user) => html! {
            <div class="nav-account">
                {
                    match &user.photo_url {
                        Some(url) => html! { <img class="avatar" src={url.clone()} alt={user.label()} /> },
                        None => html! {},
                    }
                }
                <span class="user-name">{user.label()}</span>
                <button class="btn btn-text" onclick={on_sign_out} disabled={session.snapshot.loading}>
                    {"Sign out"}
                </button>
            </div>
        },
        None => html! {
            <div class="nav-account">
                <Link<Route> classes="btn btn-text" to={Route::SignIn}>{"Sign in"}</Link<Route>>
                <Link<Route> classes="btn" to={Route::SignUp}>{"Sign up"}</Link<Route>>
            </div>
        },
    };

    html! {
        <header class="navigation">
            <nav class="container nav-bar">
                <Link<Route> classes="brand" to={Route::Home}>
                    <span class="brand-name">{APP_NAME}</span>
                </Link<Route>>
                <div class="nav-links">{links.clone()}</div>
                {account}
                <button class="btn-menu" onclick={on_toggle_menu}>{"☰"}</button>
            </nav>
            if *menu_open {
                <aside class="sidebar">{links}</aside>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_closes_from_the_breakpoint_up() {
        assert!(!sidebar_fits_inline(959.0));
        assert!(sidebar_fits_inline(960.0));
        assert!(sidebar_fits_inline(1440.0));
    }
}
