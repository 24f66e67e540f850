use parking_lot::RwLock;
use sqlx::Database;
use staffing_core_api::domain::{Candidate, Notification};
use staffing_core_api::error::{ApiError, ApiResult};
use staffing_core_api::service::Notifier;
use staffing_core_db::repository::CandidateRepository;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Listing most recently applied to the directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryListing {
    pub term: String,
    pub candidates: Vec<Candidate>,
    /// Sequence number of the request that produced this listing; 0 before
    /// the first search.
    pub seq: u64,
}

/// Searchable list of candidates, filtered on last name.
///
/// Searches may overlap. Each one takes a sequence number when it starts and
/// its answer is only applied if no later search was applied first, so a slow
/// response can never replace a fresher listing.
pub struct CandidateDirectory<DB: Database> {
    repository: Arc<dyn CandidateRepository<DB>>,
    notifier: Arc<dyn Notifier>,
    next_seq: AtomicU64,
    listing: RwLock<DirectoryListing>,
}

impl<DB: Database> CandidateDirectory<DB> {
    pub fn new(repository: Arc<dyn CandidateRepository<DB>>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            notifier,
            next_seq: AtomicU64::new(0),
            listing: RwLock::new(DirectoryListing::default()),
        }
    }

    /// Candidates whose last name contains `term`, ignoring case, ascending by
    /// last name. An empty term lists everyone.
    pub async fn query(&self, term: &str) -> ApiResult<Vec<Candidate>> {
        let models = self
            .repository
            .search_by_name(term)
            .await
            .map_err(|e| ApiError::QueryFailure(e.to_string()))?;
        Ok(models.into_iter().map(Candidate::from).collect())
    }

    /// Like [`query`](Self::query), but a failure is notified and yields an
    /// empty list.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, term: &str) -> Vec<Candidate> {
        match self.query(term).await {
            Ok(candidates) => candidates,
            Err(err) => {
                tracing::error!(error = %err, "candidate directory query failed");
                self.notifier
                    .notify(Notification::error(format!("Could not load candidates: {err}")));
                Vec::new()
            }
        }
    }

    /// Runs a search and applies its result unless a newer one already was.
    ///
    /// # Returns
    /// `true` when this response became the current listing.
    pub async fn search(&self, term: &str) -> bool {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let candidates = self.list(term).await;

        let mut listing = self.listing.write();
        if seq < listing.seq {
            tracing::debug!(seq, applied = listing.seq, term, "discarding stale directory response");
            return false;
        }
        *listing = DirectoryListing {
            term: term.to_string(),
            candidates,
            seq,
        };
        true
    }

    /// Repeats the search for the term currently displayed.
    pub async fn refresh(&self) -> bool {
        let term = self.listing.read().term.clone();
        self.search(&term).await
    }

    pub fn current(&self) -> DirectoryListing {
        self.listing.read().clone()
    }
}
