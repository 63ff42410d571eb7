use yew::prelude::*;

use crate::components::Navigation;
use crate::utils::constants::{APP_NAME, APP_VERSION};

#[derive(Properties, PartialEq)]
pub struct RootLayoutProps {
    pub children: Children,
}

/// Navegación + contenido de la ruta
#[function_component(RootLayout)]
pub fn root_layout(props: &RootLayoutProps) -> Html {
    html! {
        <div class="app-shell">
            <Navigation />
            <main class="container">
                {props.children.clone()}
            </main>
            <footer class="app-footer">
                <p>{format!("{} · v{}", APP_NAME, APP_VERSION)}</p>
            </footer>
        </div>
    }
}
