use yew::prelude::*;

use crate::services::ApiError;

/// Placeholder común mientras carga una lectura
pub fn loading() -> Html {
    html! {
        <div class="loading-state">
            <div class="spinner" />
        </div>
    }
}

fn failure_message(what: &str, error: &ApiError) -> String {
    if error.is_not_found() {
        format!("{} not found.", what)
    } else if error.is_unauthorized() {
        // Cookie de acceso caducada o ausente
        "Your session has expired. Please sign in again.".to_string()
    } else {
        format!("Could not load {}.", what.to_lowercase())
    }
}

pub fn failed(what: &str, error: &ApiError) -> Html {
    log::error!("❌ [VIEW] Error cargando {}: {}", what, error);
    let message = failure_message(what, error);
    html! {
        <div class="error-state">
            <p>{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn message_depends_on_the_failure() {
        assert_eq!(failure_message("Assignment", &http(404)), "Assignment not found.");
        assert_eq!(
            failure_message("Submissions", &http(401)),
            "Your session has expired. Please sign in again."
        );
        assert_eq!(failure_message("Submissions", &http(403)), failure_message("Submissions", &http(401)));
        assert_eq!(
            failure_message("Submissions", &ApiError::Network("offline".into())),
            "Could not load submissions."
        );
    }
}
