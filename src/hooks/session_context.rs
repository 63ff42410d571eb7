// ============================================================================
// SESSION CONTEXT - Compartir la sesión entre componentes
// ============================================================================
// El provider monta el listener de identidad una sola vez y re-renderiza
// con cada cambio del SessionManager. Al desmontar suelta ambos guards.
// ============================================================================

use yew::prelude::*;

use crate::state::{SessionManager, SessionSnapshot};

/// Lo que ven los componentes: el gestor (acciones) + la última foto del estado
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub manager: SessionManager,
    pub snapshot: SessionSnapshot,
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub manager: SessionManager,
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let snapshot = use_state(|| props.manager.snapshot());

    {
        let snapshot = snapshot.clone();
        use_effect_with(props.manager.clone(), move |manager| {
            let observer = {
                let observed = manager.clone();
                let snapshot = snapshot.clone();
                manager.subscribe(move || snapshot.set(observed.snapshot()))
            };
            snapshot.set(manager.snapshot());

            let mount = match manager.mount() {
                Ok(mount) => Some(mount),
                Err(e) => {
                    log::warn!("⚠️ [SESSION] {}", e);
                    None
                }
            };

            move || {
                drop(mount);
                drop(observer);
            }
        });
    }

    let context = SessionContext {
        manager: props.manager.clone(),
        snapshot: (*snapshot).clone(),
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
