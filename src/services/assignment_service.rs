// ============================================================================
// ASSIGNMENT SERVICE - Endpoints de tareas
// ============================================================================

use crate::models::{Assignment, AssignmentPage, AssignmentQuery, NewAssignment, WriteResult};
use crate::services::api_client::ApiClient;
use crate::services::errors::ApiError;

#[derive(Clone, Debug)]
pub struct AssignmentService {
    public: ApiClient,
    secure: ApiClient,
}

impl AssignmentService {
    pub fn new(public: ApiClient, secure: ApiClient) -> Self {
        Self { public, secure }
    }

    /// Catálogo paginado (público)
    pub async fn fetch_page(&self, query: &AssignmentQuery) -> Result<AssignmentPage, ApiError> {
        log::info!("📚 [ASSIGNMENTS] {}", query.to_path());
        let page: AssignmentPage = self
            .public
            .get_json("/assignments", &query.to_query_pairs())
            .await?;
        log::info!("✅ [ASSIGNMENTS] {} de {} tareas", page.result.len(), page.count);
        Ok(page)
    }

    pub async fn get(&self, id: &str) -> Result<Assignment, ApiError> {
        self.secure.get_json(&format!("/assignments/{}", id), &[]).await
    }

    pub async fn create(&self, assignment: &NewAssignment) -> Result<WriteResult, ApiError> {
        log::info!("📝 [ASSIGNMENTS] Creando tarea: {}", assignment.title);
        self.secure.post_json("/assignments", assignment).await
    }

    pub async fn update(&self, id: &str, assignment: &NewAssignment) -> Result<WriteResult, ApiError> {
        log::info!("📝 [ASSIGNMENTS] Actualizando tarea: {}", id);
        self.secure
            .put_json(&format!("/assignments/{}", id), assignment)
            .await
    }

    /// El backend comprueba que `email` es el creador
    pub async fn delete(&self, id: &str, email: &str) -> Result<WriteResult, ApiError> {
        log::info!("🗑️ [ASSIGNMENTS] Borrando tarea: {}", id);
        self.secure
            .delete_json(&format!("/assignments/{}", id), &[("email", email.to_string())])
            .await
    }
}

impl Default for AssignmentService {
    fn default() -> Self {
        Self::new(ApiClient::public(), ApiClient::secure())
    }
}
