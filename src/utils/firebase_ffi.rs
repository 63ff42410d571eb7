// ============================================================================
// FIREBASE FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Solo wrappers para funciones JS de js/firebase-bridge.js - Sin estado, sin lógica
// Los usuarios llegan como objetos planos { uid, email, displayName, photoURL }
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/firebase-bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = firebaseInit, catch)]
    pub fn firebase_init(config_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = firebaseSignInWithPassword, catch)]
    pub async fn sign_in_with_password(email: &str, password: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = firebaseSignUpWithPassword, catch)]
    pub async fn sign_up_with_password(email: &str, password: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = firebaseSignInWithGoogle, catch)]
    pub async fn sign_in_with_google() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = firebaseSignInWithGithub, catch)]
    pub async fn sign_in_with_github() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = firebaseSignOut, catch)]
    pub async fn sign_out() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = firebaseUpdateProfile, catch)]
    pub async fn update_profile(
        display_name: Option<String>,
        photo_url: Option<String>,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = firebaseCurrentUser)]
    pub fn current_user() -> JsValue;

    /// Devuelve la función `unsubscribe` de Firebase
    #[wasm_bindgen(js_name = firebaseOnAuthStateChanged)]
    pub fn on_auth_state_changed(callback: &js_sys::Function) -> js_sys::Function;
}
