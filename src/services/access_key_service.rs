// ============================================================================
// ACCESS KEY SERVICE - Sincroniza la sesión de Firebase con el backend
// ============================================================================
// El backend emite/borra una cookie (access key) que protege las rutas privadas
// ============================================================================

use async_trait::async_trait;
use serde::Serialize;

use crate::services::api_client::ApiClient;
use crate::services::errors::ApiError;

/// Backend que recibe los avisos de inicio/fin de sesión
#[async_trait(?Send)]
pub trait SessionBackend {
    /// `POST /create-access-key { email }`
    async fn create_access_key(&self, email: Option<&str>) -> Result<(), ApiError>;

    /// `POST /clear-access-key`
    async fn clear_access_key(&self) -> Result<(), ApiError>;
}

#[derive(Serialize)]
struct CreateAccessKeyRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

/// Implementación HTTP sobre el cliente con credenciales
#[derive(Clone, Debug)]
pub struct AccessKeyService {
    client: ApiClient,
}

impl AccessKeyService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl Default for AccessKeyService {
    fn default() -> Self {
        Self::new(ApiClient::secure())
    }
}

#[async_trait(?Send)]
impl SessionBackend for AccessKeyService {
    async fn create_access_key(&self, email: Option<&str>) -> Result<(), ApiError> {
        log::info!("🔑 [ACCESS-KEY] Solicitando access key");
        self.client
            .post_json_discard("/create-access-key", &CreateAccessKeyRequest { email })
            .await
    }

    async fn clear_access_key(&self) -> Result<(), ApiError> {
        log::info!("🔑 [ACCESS-KEY] Limpiando access key");
        self.client.post_empty("/clear-access-key").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_body_carries_email_only_when_present() {
        let with_email = serde_json::to_string(&CreateAccessKeyRequest {
            email: Some("ana@edusync.dev"),
        })
        .unwrap();
        assert_eq!(with_email, r#"{"email":"ana@edusync.dev"}"#);

        let without = serde_json::to_string(&CreateAccessKeyRequest { email: None }).unwrap();
        assert_eq!(without, "{}");
    }

    #[test]
    fn default_service_sends_credentials() {
        assert!(AccessKeyService::default().client.sends_credentials());
    }
}
