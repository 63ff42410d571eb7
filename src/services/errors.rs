//! Errores de la capa de servicios.
//!
//! `ApiError` es `Clone` porque el mismo resultado se reparte entre todas las
//! vistas que esperan una petición compartida (ver `QueryClient`).

use thiserror::Error;

/// Error de una llamada HTTP al backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Error del proveedor de identidad o del gestor de sesión
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Error devuelto por Firebase (`code` = "auth/wrong-password", ...)
    #[error("{message} ({code})")]
    Provider { code: String, message: String },

    #[error("session listener is already mounted")]
    AlreadyMounted,

    #[error("no user is signed in")]
    NoCurrentUser,
}

impl AuthError {
    pub fn provider(code: impl Into<String>, message: impl Into<String>) -> Self {
        AuthError::Provider {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            AuthError::Provider { code, .. } => code,
            AuthError::AlreadyMounted => "session/already-mounted",
            AuthError::NoCurrentUser => "auth/no-current-user",
        }
    }

    /// Mensaje para mostrar en los formularios
    pub fn user_message(&self) -> String {
        match self.code() {
            "auth/invalid-credential" | "auth/wrong-password" | "auth/user-not-found" => {
                "Email or password is incorrect.".to_string()
            }
            "auth/email-already-in-use" => "An account with this email already exists.".to_string(),
            "auth/weak-password" => "Password is too weak.".to_string(),
            "auth/invalid-email" => "Email address is not valid.".to_string(),
            "auth/popup-closed-by-user" | "auth/cancelled-popup-request" => {
                "Sign-in popup was closed before finishing.".to_string()
            }
            "auth/account-exists-with-different-credential" => {
                "This email is already linked to another sign-in method.".to_string()
            }
            "auth/too-many-requests" => "Too many attempts. Try again later.".to_string(),
            "auth/network-request-failed" => "Network error. Check your connection.".to_string(),
            "auth/no-current-user" => "You need to be signed in.".to_string(),
            _ => match self {
                AuthError::Provider { message, .. } if !message.is_empty() => message.clone(),
                _ => "Authentication failed.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_helpers() {
        let not_found = ApiError::Http {
            status: 404,
            message: "missing".into(),
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_unauthorized());
        assert_eq!(not_found.to_string(), "HTTP 404: missing");

        assert!(ApiError::Http { status: 401, message: String::new() }.is_unauthorized());
        assert_eq!(ApiError::Network("offline".into()).status(), None);
    }

    #[test]
    fn auth_messages_map_known_codes() {
        let wrong = AuthError::provider("auth/wrong-password", "Firebase: Error");
        assert_eq!(wrong.user_message(), "Email or password is incorrect.");

        let popup = AuthError::provider("auth/popup-closed-by-user", "closed");
        assert!(popup.user_message().contains("popup"));

        let unknown = AuthError::provider("auth/strange", "Something odd");
        assert_eq!(unknown.user_message(), "Something odd");

        assert_eq!(AuthError::AlreadyMounted.code(), "session/already-mounted");
    }
}
