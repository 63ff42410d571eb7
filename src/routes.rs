// ============================================================================
// ROUTES - Tabla de rutas de la SPA
// ============================================================================
// Las ocho primeras van dentro del layout raíz (navegación + contenido);
// /signin y /signup se pintan solas. Seis de ellas requieren sesión.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{PrivateRoute, RootLayout};
use crate::views::{
    AssignmentDetailsView, AssignmentsView, CreateAssignmentView, ErrorView, HomeView,
    MyAssignmentView, SignInView, SignUpView, SubmitedAssignmentView, SubmitedDetailsView,
    UpdateAssignmentView,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/assignments")]
    Assignments,
    #[at("/details/:id")]
    AssignmentDetails { id: String },
    #[at("/create")]
    CreateAssignment,
    #[at("/update/:id")]
    UpdateAssignment { id: String },
    #[at("/myAssignment")]
    MyAssignment,
    #[at("/submited")]
    SubmitedAssignment,
    #[at("/submitedDetails/:id")]
    SubmitedDetails { id: String },
    #[at("/signin")]
    SignIn,
    #[at("/signup")]
    SignUp,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Requiere identidad (PrivateRoute)
    pub fn is_guarded(&self) -> bool {
        matches!(
            self,
            Route::AssignmentDetails { .. }
                | Route::CreateAssignment
                | Route::UpdateAssignment { .. }
                | Route::MyAssignment
                | Route::SubmitedAssignment
                | Route::SubmitedDetails { .. }
        )
    }

    pub fn uses_root_layout(&self) -> bool {
        !matches!(self, Route::SignIn | Route::SignUp | Route::NotFound)
    }
}

pub fn switch(route: Route) -> Html {
    let view = match &route {
        Route::Home => html! { <HomeView /> },
        Route::Assignments => html! { <AssignmentsView /> },
        Route::AssignmentDetails { id } => html! { <AssignmentDetailsView id={id.clone()} /> },
        Route::CreateAssignment => html! { <CreateAssignmentView /> },
        Route::UpdateAssignment { id } => html! { <UpdateAssignmentView id={id.clone()} /> },
        Route::MyAssignment => html! { <MyAssignmentView /> },
        Route::SubmitedAssignment => html! { <SubmitedAssignmentView /> },
        Route::SubmitedDetails { id } => html! { <SubmitedDetailsView id={id.clone()} /> },
        Route::SignIn => html! { <SignInView /> },
        Route::SignUp => html! { <SignUpView /> },
        Route::NotFound => html! { <ErrorView /> },
    };

    let view = if route.is_guarded() {
        html! { <PrivateRoute>{view}</PrivateRoute> }
    } else {
        view
    };

    if route.uses_root_layout() {
        html! { <RootLayout>{view}</RootLayout> }
    } else {
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_every_path() {
        let table = [
            ("/", Route::Home),
            ("/assignments", Route::Assignments),
            ("/details/42", Route::AssignmentDetails { id: "42".into() }),
            ("/create", Route::CreateAssignment),
            ("/update/42", Route::UpdateAssignment { id: "42".into() }),
            ("/myAssignment", Route::MyAssignment),
            ("/submited", Route::SubmitedAssignment),
            ("/submitedDetails/7", Route::SubmitedDetails { id: "7".into() }),
            ("/signin", Route::SignIn),
            ("/signup", Route::SignUp),
        ];
        for (path, expected) in table {
            assert_eq!(Route::recognize(path), Some(expected.clone()), "{}", path);
            assert_eq!(expected.to_path(), path);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert!(matches!(Route::recognize("/nope/at/all"), None | Some(Route::NotFound)));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }

    #[test]
    fn guarded_and_layout_split() {
        let guarded = [
            Route::AssignmentDetails { id: "1".into() },
            Route::CreateAssignment,
            Route::UpdateAssignment { id: "1".into() },
            Route::MyAssignment,
            Route::SubmitedAssignment,
            Route::SubmitedDetails { id: "1".into() },
        ];
        assert!(guarded.iter().all(Route::is_guarded));
        assert!(guarded.iter().all(Route::uses_root_layout));

        for open in [Route::Home, Route::Assignments] {
            assert!(!open.is_guarded());
            assert!(open.uses_root_layout());
        }
        for standalone in [Route::SignIn, Route::SignUp, Route::NotFound] {
            assert!(!standalone.is_guarded());
            assert!(!standalone.uses_root_layout());
        }
    }
}
