pub mod assignments_viewmodel;
pub mod route_guard;
pub mod forms;

pub use assignments_viewmodel::{grid_model, AssignmentGridModel, PaginationModel};
pub use route_guard::{guard_decision, requested_url, GuardDecision, RedirectQuery};
pub use forms::{validate_password, AssignmentForm, FormError, GradeForm, SignUpForm, SubmissionForm};
