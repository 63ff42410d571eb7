use yew::prelude::*;

use crate::utils::constants::APP_NAME;

#[derive(Properties, PartialEq)]
pub struct StartupErrorProps {
    pub message: AttrValue,
}

/// Pantalla cuando el proveedor de identidad no arranca (sin router ni sesión)
#[function_component(StartupError)]
pub fn startup_error(props: &StartupErrorProps) -> Html {
    html! {
        <section class="error-page">
            <h1>{APP_NAME}</h1>
            <p>{"The application could not start."}</p>
            <p class="form-error">{props.message.clone()}</p>
        </section>
    }
}
