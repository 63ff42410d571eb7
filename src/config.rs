use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url_development: String,
    pub api_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub catalog: CatalogConfig,
    pub firebase: FirebaseConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url_development: "http://localhost:5000".to_string(),
            api_url_production: "https://edusync-server.vercel.app".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            catalog: CatalogConfig::default(),
            firebase: FirebaseConfig::default(),
        }
    }
}

/// Parámetros del catálogo de tareas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Tamaño fijo de página (`offset` en la API)
    pub page_size: u32,
    /// Número de tarjetas placeholder mientras carga
    pub skeleton_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            skeleton_count: 6,
        }
    }
}

/// Configuración de Firebase; se serializa tal cual para `initializeApp`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub app_id: String,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url_development: option_env!("API_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_development),
            api_url_production: option_env!("API_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.api_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            catalog: CatalogConfig {
                page_size: option_env!("ASSIGNMENTS_PAGE_SIZE")
                    .and_then(|v| v.parse().ok())
                    .filter(|size| *size > 0)
                    .unwrap_or(defaults.catalog.page_size),
                skeleton_count: option_env!("SKELETON_COUNT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.catalog.skeleton_count),
            },
            firebase: FirebaseConfig {
                api_key: option_env!("FIREBASE_API_KEY").unwrap_or("").to_string(),
                auth_domain: option_env!("FIREBASE_AUTH_DOMAIN").unwrap_or("").to_string(),
                project_id: option_env!("FIREBASE_PROJECT_ID").unwrap_or("").to_string(),
                app_id: option_env!("FIREBASE_APP_ID").unwrap_or("").to_string(),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn api_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_url_production,
            _ => &self.api_url_development,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.api_url(), "http://localhost:5000");

        config.environment = "production".to_string();
        assert_eq!(config.api_url(), "https://edusync-server.vercel.app");
    }

    #[test]
    fn firebase_config_serializes_in_sdk_shape() {
        let firebase = FirebaseConfig {
            api_key: "key".into(),
            auth_domain: "edusync.firebaseapp.com".into(),
            project_id: "edusync".into(),
            app_id: "1:2:web:3".into(),
        };
        let json = serde_json::to_value(&firebase).unwrap();
        assert_eq!(json["apiKey"], "key");
        assert_eq!(json["authDomain"], "edusync.firebaseapp.com");
        assert_eq!(json["projectId"], "edusync");
        assert_eq!(json["appId"], "1:2:web:3");
    }

    #[test]
    fn default_catalog_uses_nine_per_page() {
        assert_eq!(CatalogConfig::default().page_size, 9);
        assert!(CONFIG.catalog.page_size > 0);
    }
}
