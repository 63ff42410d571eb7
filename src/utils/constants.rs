/// Versión que se muestra en el pie y en el log de arranque
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Nombre de la plataforma
pub const APP_NAME: &str = "EduSync";

/// Duración de los mensajes flash (ms)
pub const FLASH_DURATION_MS: u32 = 3_000;

/// Longitud mínima de contraseña (regla de Firebase + formulario)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A partir de este ancho (px) el menú lateral se cierra solo
pub const SIDEBAR_BREAKPOINT_PX: f64 = 960.0;

/// Resultados guardados por cada caché de lecturas; se expulsa el menos usado
pub const QUERY_CACHE_CAPACITY: usize = 32;
