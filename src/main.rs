use std::rc::Rc;

use edusync_web::components::{App, AppProps, StartupError, StartupErrorProps};
use edusync_web::config::CONFIG;
use edusync_web::services::{AccessKeyService, FirebaseIdentityProvider};
use edusync_web::state::{browser_spawner, SessionManager};
use edusync_web::utils::constants::{APP_NAME, APP_VERSION};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} v{} arrancando ({})", APP_NAME, APP_VERSION, CONFIG.environment);
    log::info!("🌐 Backend: {}", CONFIG.api_url());

    let provider = match FirebaseIdentityProvider::initialize(&CONFIG.firebase) {
        Ok(provider) => provider,
        Err(e) => {
            log::error!("❌ No se pudo inicializar Firebase: {}", e);
            yew::Renderer::<StartupError>::with_props(StartupErrorProps {
                message: e.user_message().into(),
            })
            .render();
            return;
        }
    };

    let session = SessionManager::new(
        Rc::new(provider),
        Rc::new(AccessKeyService::default()),
        browser_spawner(),
    );

    yew::Renderer::<App>::with_props(AppProps { session }).render();
}
