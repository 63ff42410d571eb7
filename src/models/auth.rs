use serde::{Deserialize, Serialize};

/// Identidad autenticada (vista reducida del usuario de Firebase)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl AuthUser {
    /// Nombre para mostrar: displayName, o la parte local del email
    pub fn label(&self) -> String {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("Student")
            .to_string()
    }
}

/// Proveedores con flujo popup
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OAuthProvider {
    Google,
    Github,
}

impl OAuthProvider {
    pub fn label(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "Google",
            OAuthProvider::Github => "GitHub",
        }
    }
}

/// Cambios de perfil (displayName / photoURL)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(display_name: Option<&str>, email: Option<&str>) -> AuthUser {
        AuthUser {
            uid: "u1".into(),
            email: email.map(String::from),
            display_name: display_name.map(String::from),
            photo_url: None,
        }
    }

    #[test]
    fn label_prefers_display_name() {
        assert_eq!(user(Some("Ana Pérez"), Some("ana@edusync.dev")).label(), "Ana Pérez");
        assert_eq!(user(Some("  "), Some("ana@edusync.dev")).label(), "ana");
        assert_eq!(user(None, None).label(), "Student");
    }

    #[test]
    fn profile_update_uses_firebase_field_names() {
        let update = ProfileUpdate {
            display_name: Some("Ana".into()),
            photo_url: Some("https://i.ibb.co/ana.png".into()),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["displayName"], "Ana");
        assert_eq!(json["photoURL"], "https://i.ibb.co/ana.png");
    }
}
