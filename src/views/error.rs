use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(ErrorView)]
pub fn error_view() -> Html {
    html! {
        <section class="error-page">
            <h1>{"404"}</h1>
            <p>{"The page you are looking for does not exist."}</p>
            <Link<Route> classes="btn" to={Route::Home}>{"Back home"}</Link<Route>>
        </section>
    }
}
