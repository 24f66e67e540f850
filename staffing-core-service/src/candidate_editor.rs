use sqlx::Database;
use staffing_core_api::domain::{
    ActionKind, Candidate, Draft, RECORD_CREATED_DETAIL, RECORD_MODIFIED_DETAIL,
};
use staffing_core_api::error::{ApiError, ApiResult};
use staffing_core_api::service::Clock;
use staffing_core_db::models::{CandidateRecord, NewCandidateModel};
use staffing_core_db::repository::CandidateRepository;
use std::sync::Arc;

use crate::audit_logger::AuditLogger;

/// Writes candidate drafts and keeps the audit trail in step.
///
/// A submission is two separate store calls: the record write, then the
/// audit append. The append only happens once the record write succeeded,
/// and a failed append never undoes the record write.
pub struct CandidateEditor<DB: Database> {
    candidates: Arc<dyn CandidateRepository<DB>>,
    audit: AuditLogger<DB>,
    clock: Arc<dyn Clock>,
}

impl<DB: Database> CandidateEditor<DB> {
    pub fn new(
        candidates: Arc<dyn CandidateRepository<DB>>,
        audit: AuditLogger<DB>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            candidates,
            audit,
            clock,
        }
    }

    pub fn open_new(&self) -> Draft {
        Draft::blank()
    }

    pub fn open_existing(&self, candidate: &Candidate) -> Draft {
        Draft::from_candidate(candidate)
    }

    /// Validates and writes `draft`.
    ///
    /// # Arguments
    /// * `draft` - Form content
    /// * `editing` - Record being edited, `None` for a new candidate
    ///
    /// # Returns
    /// The candidate as stored. Errors:
    /// * `Validation` - nothing was written
    /// * `WriteFailure` - the record write failed, nothing was logged
    /// * `MissingIdentity` - the insert was acknowledged without an id, nothing was logged
    /// * `AuditWriteFailure` - the record is saved but its audit event is missing
    ///
    /// # Example
    /// ```ignore
    /// let draft = editor.open_new().with(FieldChange::LastName("Martin".into()));
    /// let saved = editor.submit(&draft, None).await?;
    /// ```
    #[tracing::instrument(skip_all, fields(candidate_id = ?editing.map(|c| c.id)))]
    pub async fn submit(&self, draft: &Draft, editing: Option<&Candidate>) -> ApiResult<Candidate> {
        let submission = draft.validate()?;
        let now = self.clock.now();

        match editing {
            None => {
                let new_model =
                    NewCandidateModel::from_submission(&submission, now).map_err(ApiError::Validation)?;
                let stored = self
                    .candidates
                    .insert(new_model)
                    .await
                    .map_err(|e| ApiError::WriteFailure(e.to_string()))?;
                let Some(stored) = stored else {
                    tracing::warn!("candidate insert returned no identity, audit event skipped");
                    return Err(ApiError::MissingIdentity);
                };
                self.append(stored.into(), ActionKind::Creation, RECORD_CREATED_DETAIL)
                    .await
            }
            Some(original) => {
                // keeps updated_at >= created_at
                let now = now.max(original.created_at);
                let record =
                    CandidateRecord::from_submission(&submission, now).map_err(ApiError::Validation)?;
                self.candidates
                    .update_by_id(original.id, record)
                    .await
                    .map_err(|e| ApiError::WriteFailure(e.to_string()))?;
                let updated = original.with_submission(&submission, now);
                self.append(updated, ActionKind::Modification, RECORD_MODIFIED_DETAIL)
                    .await
            }
        }
    }

    async fn append(&self, candidate: Candidate, action: ActionKind, detail: &str) -> ApiResult<Candidate> {
        match self.audit.record(candidate.id, action.clone(), detail).await {
            Ok(_) => Ok(candidate),
            Err(err) => {
                tracing::warn!(
                    candidate_id = %candidate.id,
                    %action,
                    error = %err,
                    "candidate saved but audit append failed"
                );
                Err(ApiError::AuditWriteFailure {
                    candidate: Box::new(candidate),
                    reason: err.to_string(),
                })
            }
        }
    }
}
