use sqlx::Database;
use staffing_core_api::domain::{ActionKind, AuditEvent};
use staffing_core_api::error::{ApiError, ApiResult};
use staffing_core_api::service::Clock;
use staffing_core_db::models::NewCandidateLogModel;
use staffing_core_db::repository::CandidateLogRepository;
use std::sync::Arc;
use uuid::Uuid;

/// Appends entries to the candidate audit trail.
///
/// One call writes one row: no batching, no deduplication, no retry.
pub struct AuditLogger<DB: Database> {
    repository: Arc<dyn CandidateLogRepository<DB>>,
    clock: Arc<dyn Clock>,
}

impl<DB: Database> AuditLogger<DB> {
    pub fn new(repository: Arc<dyn CandidateLogRepository<DB>>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Appends one event stamped with the current time.
    ///
    /// # Arguments
    /// * `candidate_id` - Candidate the event refers to
    /// * `action` - Kind of change
    /// * `detail` - Free-text description
    ///
    /// # Returns
    /// The stored event, or `WriteFailure` / `MissingIdentity` when the append
    /// did not go through. The caller decides how to surface it.
    #[tracing::instrument(skip(self, detail), fields(%candidate_id, %action))]
    pub async fn record(
        &self,
        candidate_id: Uuid,
        action: ActionKind,
        detail: &str,
    ) -> ApiResult<AuditEvent> {
        let entry = NewCandidateLogModel {
            candidate_id,
            action,
            detail: detail.to_string(),
            created_at: self.clock.now(),
        };
        let stored = self
            .repository
            .insert(entry)
            .await
            .map_err(|e| ApiError::WriteFailure(e.to_string()))?
            .ok_or(ApiError::MissingIdentity)?;
        Ok(stored.into())
    }
}
