// ============================================================================
// USE SESSION HOOK
// ============================================================================

use yew::prelude::*;

use crate::hooks::session_context::SessionContext;

/// Sesión actual; el componente se re-renderiza con cada cambio de identidad
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("use_session() must be used inside <SessionProvider>")
}
