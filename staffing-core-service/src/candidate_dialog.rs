use sqlx::Database;
use staffing_core_api::domain::{
    Candidate, EditorState, FieldChange, HistoryView, Notification,
};
use staffing_core_api::error::{ApiError, ApiResult};
use staffing_core_api::service::Notifier;
use staffing_core_db::repository::CandidateRepository;
use std::sync::Arc;
use uuid::Uuid;

use crate::candidate_directory::CandidateDirectory;
use crate::candidate_editor::CandidateEditor;
use crate::history_viewer::HistoryViewer;

/// One editor dialog session: the draft, its lifecycle and the history tab.
///
/// Holds no lock of its own; a session is driven by a single caller.
pub struct CandidateDialog<DB: Database> {
    directory: Arc<CandidateDirectory<DB>>,
    editor: Arc<CandidateEditor<DB>>,
    history: Arc<HistoryViewer<DB>>,
    candidates: Arc<dyn CandidateRepository<DB>>,
    notifier: Arc<dyn Notifier>,
    state: EditorState,
    history_view: HistoryView,
}

impl<DB: Database> CandidateDialog<DB> {
    pub fn new(
        directory: Arc<CandidateDirectory<DB>>,
        editor: Arc<CandidateEditor<DB>>,
        history: Arc<HistoryViewer<DB>>,
        candidates: Arc<dyn CandidateRepository<DB>>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            directory,
            editor,
            history,
            candidates,
            notifier,
            state: EditorState::Closed,
            history_view: HistoryView::Loading,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn history(&self) -> &HistoryView {
        &self.history_view
    }

    pub fn open_new(&mut self) -> ApiResult<()> {
        self.state.open_new()?;
        self.history_view = HistoryView::Empty;
        Ok(())
    }

    /// Opens `candidate` for editing and loads its history.
    pub async fn open_existing(&mut self, candidate: Candidate) -> ApiResult<()> {
        let candidate_id = candidate.id;
        self.state.open_existing(candidate)?;
        self.history_view = HistoryView::Loading;
        self.history_view = self.history.load(candidate_id).await;
        Ok(())
    }

    /// Opens a candidate known only by id; the record and its history are
    /// fetched concurrently.
    #[tracing::instrument(skip(self))]
    pub async fn open_existing_by_id(&mut self, candidate_id: Uuid) -> ApiResult<()> {
        if self.state.is_open() {
            return Err(ApiError::InvalidState(format!(
                "cannot open a candidate while {}",
                self.state.name()
            )));
        }

        let (loaded, history) = tokio::join!(
            self.candidates.load(candidate_id),
            self.history.load(candidate_id)
        );
        let candidate = match loaded {
            Ok(model) => Candidate::from(model),
            Err(err) => {
                let err = ApiError::NotFound(err.to_string());
                self.notifier.notify(Notification::error(err.to_string()));
                return Err(err);
            }
        };

        self.state.open_existing(candidate)?;
        self.history_view = history;
        Ok(())
    }

    pub fn change(&mut self, change: FieldChange) -> ApiResult<()> {
        self.state.change(change)
    }

    /// Submits the current draft.
    ///
    /// On success the dialog closes and the directory is re-queried. On a
    /// failed write the dialog returns to where it was with the draft intact.
    /// When the record was written but the follow-up failed
    /// (`AuditWriteFailure`, `MissingIdentity`) the dialog still closes, and a
    /// warning is shown instead of a success message.
    pub async fn submit(&mut self) -> ApiResult<Candidate> {
        let (draft, _) = self.state.begin_submit()?;
        let editing = self.state.editing_candidate().cloned();
        let is_new = editing.is_none();

        match self.editor.submit(&draft, editing.as_ref()).await {
            Ok(candidate) => {
                self.finish()?;
                let message = if is_new { "Candidate created" } else { "Candidate updated" };
                self.notifier.notify(Notification::success(message));
                self.directory.refresh().await;
                Ok(candidate)
            }
            Err(err) if err.record_committed() => {
                self.finish()?;
                self.notifier
                    .notify(Notification::warning(format!("Candidate saved, but: {err}")));
                self.directory.refresh().await;
                Err(err)
            }
            Err(err) => {
                self.state.submit_failed()?;
                self.notifier.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }

    /// Discards the draft.
    pub fn close(&mut self) -> ApiResult<()> {
        self.state.close()?;
        self.history_view = HistoryView::Loading;
        Ok(())
    }

    fn finish(&mut self) -> ApiResult<()> {
        self.state.submit_succeeded()?;
        self.history_view = HistoryView::Loading;
        Ok(())
    }
}
