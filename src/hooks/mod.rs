pub mod session_context;
pub mod use_session;
pub mod use_query;

pub use session_context::{SessionContext, SessionProvider};
pub use use_session::use_session;
pub use use_query::{use_query, use_query_clients, QueryClients};
