// ============================================================================
// APP - Raíz Yew: providers + router
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::{QueryClients, SessionProvider};
use crate::routes::{switch, Route};
use crate::state::SessionManager;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub session: SessionManager,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    // Una sola caché por vida de la app
    let clients = use_state(QueryClients::new);

    html! {
        <SessionProvider manager={props.session.clone()}>
            <ContextProvider<QueryClients> context={(*clients).clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<QueryClients>>
        </SessionProvider>
    }
}
