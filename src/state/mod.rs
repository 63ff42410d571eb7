// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod session_manager;
pub mod query_client;

pub use reactivity::{ObserverGuard, Observers, ReactiveState};
pub use session_manager::{browser_spawner, SessionManager, SessionMount, SessionSnapshot, TaskSpawner};
pub use query_client::{QueryClient, QueryResult, QueryState};
