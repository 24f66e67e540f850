use sqlx::Database;
use staffing_core_api::domain::{AuditEvent, HistoryView, Notification};
use staffing_core_api::service::Notifier;
use staffing_core_db::repository::CandidateLogRepository;
use std::sync::Arc;
use uuid::Uuid;

/// Read side of the audit trail. Loaded once per dialog open, never live.
pub struct HistoryViewer<DB: Database> {
    repository: Arc<dyn CandidateLogRepository<DB>>,
    notifier: Arc<dyn Notifier>,
}

impl<DB: Database> HistoryViewer<DB> {
    pub fn new(repository: Arc<dyn CandidateLogRepository<DB>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Events for `candidate_id`, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, candidate_id: Uuid) -> HistoryView {
        match self.repository.load_history(candidate_id).await {
            Ok(models) => HistoryView::from_events(models.into_iter().map(AuditEvent::from).collect()),
            Err(err) => {
                tracing::error!(error = %err, "history query failed");
                self.notifier
                    .notify(Notification::error(format!("Could not load history: {err}")));
                HistoryView::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helper::{RecordingNotifier, StoreStub};
    use chrono::{Duration, TimeZone, Utc};
    use sqlx::Postgres;
    use staffing_core_api::domain::{ActionKind, NotificationLevel};

    fn viewer(store: &Arc<StoreStub>, notifier: &Arc<RecordingNotifier>) -> HistoryViewer<Postgres> {
        HistoryViewer::<Postgres>::new(store.clone(), notifier.clone())
    }

    #[tokio::test]
    async fn test_events_come_newest_first() {
        let store = StoreStub::new();
        let notifier = RecordingNotifier::new();
        let candidate_id = store.seed_candidate("Martin", "Lea").id;
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        store.seed_log(candidate_id, "creation", start);
        store.seed_log(candidate_id, "modification", start + Duration::days(2));
        store.seed_log(candidate_id, "modification", start + Duration::days(1));

        let view = viewer(&store, &notifier).load(candidate_id).await;

        let events = view.events();
        assert_eq!(events.len(), 3);
        assert!(events.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(events[2].action, ActionKind::Creation);
        assert_eq!(view.lines()[2], "[01/05/2024 08:00] creation — seeded creation");
    }

    #[tokio::test]
    async fn test_no_events_is_explicitly_empty() {
        let store = StoreStub::new();
        let notifier = RecordingNotifier::new();

        let view = viewer(&store, &notifier).load(Uuid::new_v4()).await;

        assert_eq!(view, HistoryView::Empty);
        assert!(notifier.sent.lock().is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_unavailable_and_notified() {
        let store = StoreStub::new();
        let notifier = RecordingNotifier::new();
        store.fail(|f| f.log_query = true);

        let view = viewer(&store, &notifier).load(Uuid::new_v4()).await;

        assert_eq!(view, HistoryView::Unavailable);
        assert_eq!(notifier.levels(), vec![NotificationLevel::Error]);
    }
}
