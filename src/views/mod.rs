pub mod form_input;
pub mod query_status;
pub mod assignment_form;
pub mod home;
pub mod assignments;
pub mod assignment_details;
pub mod create_assignment;
pub mod update_assignment;
pub mod my_assignment;
pub mod submited_assignment;
pub mod submited_details;
pub mod sign_in;
pub mod sign_up;
pub mod error;

pub use home::HomeView;
pub use assignments::AssignmentsView;
pub use assignment_details::AssignmentDetailsView;
pub use create_assignment::CreateAssignmentView;
pub use update_assignment::UpdateAssignmentView;
pub use my_assignment::MyAssignmentView;
pub use submited_assignment::SubmitedAssignmentView;
pub use submited_details::SubmitedDetailsView;
pub use sign_in::SignInView;
pub use sign_up::SignUpView;
pub use error::ErrorView;
