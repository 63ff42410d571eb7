pub mod errors;
pub mod api_client;
pub mod identity_provider;
pub mod firebase_provider;
pub mod access_key_service;
pub mod assignment_service;
pub mod submission_service;

pub use errors::{ApiError, AuthError};
pub use api_client::ApiClient;
pub use identity_provider::{AuthListener, AuthSubscription, IdentityProvider};
pub use firebase_provider::FirebaseIdentityProvider;
pub use access_key_service::{AccessKeyService, SessionBackend};
pub use assignment_service::AssignmentService;
pub use submission_service::SubmissionService;
