// ============================================================================
// FIREBASE PROVIDER - IdentityProvider sobre Firebase Authentication
// ============================================================================

use async_trait::async_trait;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::FirebaseConfig;
use crate::models::{AuthUser, OAuthProvider, ProfileUpdate};
use crate::services::errors::AuthError;
use crate::services::identity_provider::{AuthListener, AuthSubscription, IdentityProvider};
use crate::utils::firebase_ffi;

/// Handle del SDK; se construye una vez al arrancar
pub struct FirebaseIdentityProvider {
    _private: (),
}

impl FirebaseIdentityProvider {
    /// Inicializa la app de Firebase con la configuración de compilación
    pub fn initialize(config: &FirebaseConfig) -> Result<Self, AuthError> {
        if config.api_key.is_empty() {
            log::warn!("⚠️ [FIREBASE] FIREBASE_API_KEY vacío, la autenticación fallará");
        }
        let config_json = serde_json::to_string(config)
            .map_err(|e| AuthError::provider("app/invalid-config", e.to_string()))?;
        firebase_ffi::firebase_init(&config_json).map_err(auth_error_from_js)?;
        log::info!("🔥 [FIREBASE] Inicializado para proyecto {}", config.project_id);
        Ok(Self { _private: () })
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let value = firebase_ffi::sign_in_with_password(email, password)
            .await
            .map_err(auth_error_from_js)?;
        user_from_js(&value).ok_or(AuthError::NoCurrentUser)
    }

    async fn sign_up_with_password(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let value = firebase_ffi::sign_up_with_password(email, password)
            .await
            .map_err(auth_error_from_js)?;
        user_from_js(&value).ok_or(AuthError::NoCurrentUser)
    }

    async fn sign_in_with_popup(&self, provider: OAuthProvider) -> Result<AuthUser, AuthError> {
        let result = match provider {
            OAuthProvider::Google => firebase_ffi::sign_in_with_google().await,
            OAuthProvider::Github => firebase_ffi::sign_in_with_github().await,
        };
        let value = result.map_err(auth_error_from_js)?;
        user_from_js(&value).ok_or(AuthError::NoCurrentUser)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        firebase_ffi::sign_out().await.map_err(auth_error_from_js)?;
        Ok(())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), AuthError> {
        if self.current_user().is_none() {
            return Err(AuthError::NoCurrentUser);
        }
        firebase_ffi::update_profile(update.display_name.clone(), update.photo_url.clone())
            .await
            .map_err(auth_error_from_js)?;
        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        user_from_js(&firebase_ffi::current_user())
    }

    fn on_auth_state_changed(&self, listener: AuthListener) -> AuthSubscription {
        let closure = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            listener(user_from_js(&value));
        });
        let unsubscribe = firebase_ffi::on_auth_state_changed(closure.as_ref().unchecked_ref());
        log::debug!("👂 [FIREBASE] Listener onAuthStateChanged registrado");

        // El closure vive dentro de la suscripción: se libera después de desregistrarlo en JS
        AuthSubscription::new(move || {
            if let Err(e) = unsubscribe.call0(&JsValue::NULL) {
                log::warn!("⚠️ [FIREBASE] Error desregistrando listener: {:?}", e);
            }
            drop(closure);
            log::debug!("🔌 [FIREBASE] Listener onAuthStateChanged liberado");
        })
    }
}

fn js_string(value: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

/// Objeto plano del bridge -> AuthUser (null/undefined = sin sesión)
fn user_from_js(value: &JsValue) -> Option<AuthUser> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let uid = js_string(value, "uid")?;
    Some(AuthUser {
        uid,
        email: js_string(value, "email"),
        display_name: js_string(value, "displayName"),
        photo_url: js_string(value, "photoURL"),
    })
}

/// FirebaseError { code, message } -> AuthError
fn auth_error_from_js(error: JsValue) -> AuthError {
    let code = js_string(&error, "code").unwrap_or_else(|| "auth/unknown".to_string());
    let message = js_string(&error, "message")
        .or_else(|| error.as_string())
        .unwrap_or_default();
    log::warn!("⚠️ [FIREBASE] {}: {}", code, message);
    AuthError::provider(code, message)
}
