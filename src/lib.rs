// ============================================================================
// EDUSYNC WEB - FRONTEND DE TAREAS (RUST + YEW + WASM)
// ============================================================================
// Capas:
// - Views / Components: Yew function components (solo render + callbacks)
// - ViewModels: lógica pura de UI (rejilla, guard, formularios)
// - Hooks: contexto de sesión y lecturas cacheadas
// - State: SessionManager + QueryClient con Rc<RefCell> y notificaciones
// - Services: SOLO comunicación con backend y proveedor de identidad
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod hooks;
pub mod components;
pub mod views;
pub mod routes;
pub mod utils;
