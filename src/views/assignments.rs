use yew::prelude::*;

use crate::components::AssignmentsContainer;

#[function_component(AssignmentsView)]
pub fn assignments_view() -> Html {
    html! {
        <section class="page">
            <header class="page-header">
                <h1>{"Assignments"}</h1>
                <p>{"Filter by difficulty and sort by due date."}</p>
            </header>
            <AssignmentsContainer />
        </section>
    }
}
