// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Adaptador sobre gloo_net con URL base. Dos variantes:
// - público: peticiones sin cookies
// - seguro: `credentials: include` para la cookie de access-key
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::services::errors::ApiError;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    with_credentials: bool,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, with_credentials: bool) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            with_credentials,
        }
    }

    /// Cliente sin credenciales (catálogo público)
    pub fn public() -> Self {
        Self::new(CONFIG.api_url(), false)
    }

    /// Cliente que envía la cookie de sesión
    pub fn secure() -> Self {
        Self::new(CONFIG.api_url(), true)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn sends_credentials(&self) -> bool {
        self.with_credentials
    }

    /// Une la URL base con una ruta relativa
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.with_credentials {
            builder.credentials(RequestCredentials::Include)
        } else {
            builder
        }
    }

    /// GET con parámetros de query, respuesta JSON
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] GET {} {:?}", url, query);

        let request = self
            .prepare(Request::get(&url))
            .query(query.iter().map(|(key, value)| (*key, value.as_str())))
            .build()
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// POST con cuerpo JSON, respuesta JSON
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] POST {}", url);

        let request = self
            .prepare(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// POST con cuerpo JSON; ignora la respuesta
    pub async fn post_json_discard<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] POST {}", url);

        let request = self
            .prepare(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        self.send(request).await.map(|_| ())
    }

    /// POST sin cuerpo; ignora la respuesta
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] POST {}", url);

        let request = self
            .prepare(Request::post(&url))
            .build()
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        self.send(request).await.map(|_| ())
    }

    /// PUT con cuerpo JSON
    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] PUT {}", url);

        let request = self
            .prepare(Request::put(&url))
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// PATCH con cuerpo JSON
    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] PATCH {}", url);

        let request = self
            .prepare(Request::patch(&url))
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// DELETE con parámetros de query
    pub async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("🌐 [API] DELETE {}", url);

        let request = self
            .prepare(Request::delete(&url))
            .query(query.iter().map(|(key, value)| (*key, value.as_str())))
            .build()
            .map_err(|e| ApiError::Serialization(e.to_string()))?;

        let response = self.send(request).await?;
        parse_json(response).await
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let message = match response.text().await {
            Ok(text) if !text.trim().is_empty() => text,
            _ => response.status_text(),
        };
        log::warn!("⚠️ [API] HTTP {}: {}", status, message);
        Err(ApiError::Http { status, message })
    }
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
