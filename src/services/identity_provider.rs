// ============================================================================
// IDENTITY PROVIDER - Abstracción del proveedor de identidad
// ============================================================================
// La implementación real es Firebase (firebase_provider.rs); los tests usan
// un proveedor falso. Se inyecta una sola vez al arrancar la app.
// ============================================================================

use async_trait::async_trait;

use crate::models::{AuthUser, OAuthProvider, ProfileUpdate};
use crate::services::errors::AuthError;

/// Callback que recibe cada cambio de identidad (None = sesión cerrada)
pub type AuthListener = Box<dyn Fn(Option<AuthUser>)>;

#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<AuthUser, AuthError>;

    async fn sign_in_with_popup(&self, provider: OAuthProvider) -> Result<AuthUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// Actualiza displayName/photoURL del usuario actual.
    /// No dispara ningún evento de cambio de identidad.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), AuthError>;

    fn current_user(&self) -> Option<AuthUser>;

    /// Registra el listener; se desregistra al soltar la suscripción
    fn on_auth_state_changed(&self, listener: AuthListener) -> AuthSubscription;
}

/// Suscripción con liberación garantizada: al hacer drop se llama a `unsubscribe`
#[must_use = "dropping the subscription detaches the listener"]
pub struct AuthSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl AuthSubscription {
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            release: Some(Box::new(release)),
        }
    }

}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for AuthSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn release_runs_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        {
            let released = released.clone();
            let _subscription = AuthSubscription::new(move || released.set(released.get() + 1));
        }
        assert_eq!(released.get(), 1);
    }
}
