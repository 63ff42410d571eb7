// ============================================================================
// SUBMISSION SERVICE - Entregas de soluciones y corrección
// ============================================================================

use crate::models::{Grade, NewSubmission, Submission, SubmissionFilter, WriteResult};
use crate::services::api_client::ApiClient;
use crate::services::errors::ApiError;

#[derive(Clone, Debug)]
pub struct SubmissionService {
    client: ApiClient,
}

impl SubmissionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn submit(&self, submission: &NewSubmission) -> Result<WriteResult, ApiError> {
        log::info!("📤 [SUBMISSIONS] Entregando solución para {}", submission.assignment_id);
        self.client.post_json("/submissions", submission).await
    }

    pub async fn list(&self, filter: &SubmissionFilter) -> Result<Vec<Submission>, ApiError> {
        match filter {
            SubmissionFilter::Pending => {
                self.client
                    .get_json("/submissions", &[("status", "pending".to_string())])
                    .await
            }
            SubmissionFilter::ByExaminee(email) => {
                self.client
                    .get_json("/my-submissions", &[("email", email.clone())])
                    .await
            }
        }
    }

    pub async fn get(&self, id: &str) -> Result<Submission, ApiError> {
        self.client.get_json(&format!("/submissions/{}", id), &[]).await
    }

    pub async fn grade(&self, id: &str, grade: &Grade) -> Result<WriteResult, ApiError> {
        log::info!("✍️ [SUBMISSIONS] Corrigiendo entrega {}: {}", id, grade.obtained_marks);
        self.client
            .patch_json(&format!("/submissions/{}", id), grade)
            .await
    }
}

impl Default for SubmissionService {
    fn default() -> Self {
        Self::new(ApiClient::secure())
    }
}
