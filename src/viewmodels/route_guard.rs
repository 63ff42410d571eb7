// ============================================================================
// ROUTE GUARD - Decisión de acceso a rutas privadas
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::state::SessionSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// La sesión aún no está resuelta: placeholder
    Pending,
    /// Sin identidad: a /signin recordando la ruta pedida
    Redirect { from: String },
    Render,
}

pub fn guard_decision(snapshot: &SessionSnapshot, requested_path: &str) -> GuardDecision {
    if snapshot.loading {
        return GuardDecision::Pending;
    }
    match snapshot.user {
        Some(_) => GuardDecision::Render,
        None => GuardDecision::Redirect {
            from: requested_path.to_string(),
        },
    }
}

/// Ruta pedida tal como se recuerda en `?from=`, con su query string
pub fn requested_url(path: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Query string de /signin (`?from=/details/42`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RedirectQuery {
    #[serde(default)]
    pub from: Option<String>,
}

impl RedirectQuery {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
        }
    }

    /// Destino tras iniciar sesión; solo rutas locales, por defecto "/"
    pub fn target(&self) -> String {
        match self.from.as_deref() {
            Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
            _ => "/".to_string(),
        }
    }

    /// Destino separado en (ruta, query string sin '?')
    pub fn target_parts(&self) -> (String, String) {
        let target = self.target();
        match target.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (target, String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthUser;

    fn signed_in() -> SessionSnapshot {
        SessionSnapshot {
            user: Some(AuthUser {
                uid: "u1".into(),
                email: Some("ana@edusync.dev".into()),
                display_name: None,
                photo_url: None,
            }),
            loading: false,
        }
    }

    #[test]
    fn loading_session_is_pending_even_with_user() {
        let mut snapshot = signed_in();
        snapshot.loading = true;
        assert_eq!(guard_decision(&snapshot, "/create"), GuardDecision::Pending);
        assert_eq!(
            guard_decision(&SessionSnapshot::default(), "/create"),
            GuardDecision::Pending
        );
    }

    #[test]
    fn resolved_session_decides_deterministically() {
        assert_eq!(guard_decision(&signed_in(), "/create"), GuardDecision::Render);

        let anonymous = SessionSnapshot {
            user: None,
            loading: false,
        };
        assert_eq!(
            guard_decision(&anonymous, "/details/42"),
            GuardDecision::Redirect {
                from: "/details/42".into()
            }
        );
    }

    #[test]
    fn redirect_target_only_accepts_local_paths() {
        assert_eq!(RedirectQuery::new("/details/42").target(), "/details/42");
        assert_eq!(RedirectQuery::default().target(), "/");
        assert_eq!(RedirectQuery::new("https://evil.dev").target(), "/");
        assert_eq!(RedirectQuery::new("//evil.dev").target(), "/");
    }

    #[test]
    fn requested_query_string_survives_the_redirect() {
        assert_eq!(requested_url("/details/42", ""), "/details/42");
        assert_eq!(requested_url("/details/42", "?tab=marks"), "/details/42?tab=marks");
        assert_eq!(requested_url("/details/42", "tab=marks"), "/details/42?tab=marks");

        let query = RedirectQuery::new(requested_url("/submited", "?page=2&level=hard"));
        assert_eq!(
            query.target_parts(),
            ("/submited".to_string(), "page=2&level=hard".to_string())
        );
        assert_eq!(
            RedirectQuery::new("/create").target_parts(),
            ("/create".to_string(), String::new())
        );
    }
}
