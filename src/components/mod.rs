pub mod app;
pub mod root_layout;
pub mod navigation;
pub mod private_route;
pub mod flash_message;
pub mod assignments_container;
pub mod assignment_card;
pub mod assignments_skeleton;
pub mod filter_panel;
pub mod pagination;
pub mod startup_error;

pub use app::{App, AppProps};
pub use root_layout::RootLayout;
pub use navigation::Navigation;
pub use private_route::PrivateRoute;
pub use flash_message::{Flash, FlashKind, FlashMessage};
pub use assignments_container::AssignmentsContainer;
pub use assignment_card::AssignmentCard;
pub use assignments_skeleton::AssignmentsSkeleton;
pub use filter_panel::FilterPanel;
pub use pagination::Pagination;
pub use startup_error::{StartupError, StartupErrorProps};
