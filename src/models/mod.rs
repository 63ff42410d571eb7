pub mod assignment;
pub mod submission;
pub mod auth;
pub mod query;

pub use assignment::{Assignment, AssignmentPage, Creator, NewAssignment, WriteResult, LEVELS};
pub use submission::{Examinee, Grade, NewSubmission, Submission, SubmissionFilter, SubmissionStatus};
pub use auth::{AuthUser, OAuthProvider, ProfileUpdate};
pub use query::{AssignmentQuery, SortOrder, DEFAULT_PAGE_SIZE};
