use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::utils::constants::APP_NAME;

#[function_component(HomeView)]
pub fn home_view() -> Html {
    html! {
        <section class="hero">
            <h1>{format!("Learn together with {}", APP_NAME)}</h1>
            <p>{"Create assignments, take the ones your friends publish and grade each other's work."}</p>
            <Link<Route> classes="btn btn-primary" to={Route::Assignments}>{"Browse assignments"}</Link<Route>>
        </section>
    }
}
