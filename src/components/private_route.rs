// ============================================================================
// PRIVATE ROUTE - Envuelve vistas que requieren sesión
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_session;
use crate::routes::Route;
use crate::viewmodels::{guard_decision, requested_url, GuardDecision, RedirectQuery};

#[derive(Properties, PartialEq)]
pub struct PrivateRouteProps {
    pub children: Children,
}

#[function_component(PrivateRoute)]
pub fn private_route(props: &PrivateRouteProps) -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let location = use_location();

    let requested = location
        .as_ref()
        .map(|location| requested_url(location.path(), location.query_str()))
        .unwrap_or_else(|| "/".to_string());
    let decision = guard_decision(&session.snapshot, &requested);

    {
        use_effect_with(decision.clone(), move |decision| {
            if let (GuardDecision::Redirect { from }, Some(navigator)) = (decision, navigator) {
                log::info!("🔒 [GUARD] Sin sesión, redirigiendo a /signin desde {}", from);
                if let Err(e) = navigator.replace_with_query(&Route::SignIn, &RedirectQuery::new(from.clone())) {
                    log::error!("❌ [GUARD] Error redirigiendo: {:?}", e);
                }
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Pending => html! {
            <div class="guard-pending">
                <div class="spinner" />
            </div>
        },
        GuardDecision::Redirect { .. } => html! {},
        GuardDecision::Render => html! { <>{props.children.clone()}</> },
    }
}
