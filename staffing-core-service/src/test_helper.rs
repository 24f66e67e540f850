//! In-memory store, clock and notifier for service tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use parking_lot::Mutex;
use sqlx::Database;
use staffing_core_api::domain::{Notification, NotificationLevel, ReferenceCategory};
use staffing_core_api::service::{Clock, Notifier};
use staffing_core_db::models::{
    CandidateLogModel, CandidateModel, CandidateRecord, NewCandidateLogModel, NewCandidateModel,
    NewOperatorAccountModel, NewReferenceEntryModel, OperatorAccountModel, OperatorAccountRecord,
    ReferenceEntryModel, ReferenceEntryRecord,
};
use staffing_core_db::repository::{
    DeleteById, Insert, ListAll, ListByCategory, Load, LoadHistory, SearchByName, UpdateById,
};
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::Notify;
use uuid::Uuid;

type StubResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Switches that make the next calls of a given kind fail.
#[derive(Debug, Default, Clone)]
pub struct Failures {
    pub candidate_query: bool,
    pub candidate_insert: bool,
    pub candidate_update: bool,
    pub insert_without_identity: bool,
    pub log_insert: bool,
    pub log_query: bool,
    pub settings: bool,
}

/// One store backing the candidate and audit repository traits. Settings
/// tables are reached through [`ReferenceTableStub`] and [`OperatorTableStub`].
#[derive(Default)]
pub struct StoreStub {
    pub candidates: Mutex<Vec<CandidateModel>>,
    pub logs: Mutex<Vec<CandidateLogModel>>,
    pub references: Mutex<Vec<ReferenceEntryModel>>,
    pub operators: Mutex<Vec<OperatorAccountModel>>,
    pub failures: Mutex<Failures>,
    /// Searches for these terms wait until the gate is opened.
    pub search_gates: Mutex<HashMap<String, Arc<Notify>>>,
    pub update_calls: Mutex<usize>,
}

impl StoreStub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail(&self, set: impl FnOnce(&mut Failures)) {
        set(&mut self.failures.lock());
    }

    pub fn gate_search(&self, term: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.search_gates.lock().insert(term.to_string(), gate.clone());
        gate
    }

    pub fn seed_candidate(&self, last_name: &str, first_name: &str) -> CandidateModel {
        let now = Utc::now();
        let model = CandidateModel {
            id: Uuid::new_v4(),
            last_name: last_name.try_into().unwrap(),
            first_name: first_name.try_into().unwrap(),
            email: None,
            phone: None,
            vehicle_owner: None,
            active: None,
            sectors: None,
            date_of_birth: None,
            created_at: now,
            updated_at: now,
        };
        self.candidates.lock().push(model.clone());
        model
    }

    pub fn seed_log(&self, candidate_id: Uuid, action: &str, created_at: DateTime<Utc>) {
        self.logs.lock().push(CandidateLogModel {
            id: Uuid::new_v4(),
            candidate_id,
            action: action.into(),
            detail: format!("seeded {action}"),
            created_at,
        });
    }

    pub fn logs_for(&self, candidate_id: Uuid) -> Vec<CandidateLogModel> {
        self.logs
            .lock()
            .iter()
            .filter(|log| log.candidate_id == candidate_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl<DB: Database> Load<DB, CandidateModel> for StoreStub {
    async fn load(&self, id: Uuid) -> StubResult<CandidateModel> {
        if self.failures.lock().candidate_query {
            return Err("connection reset".into());
        }
        self.candidates
            .lock()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| format!("Candidate {id} not found").into())
    }
}

#[async_trait]
impl<DB: Database> SearchByName<DB, CandidateModel> for StoreStub {
    async fn search_by_name(&self, term: &str) -> StubResult<Vec<CandidateModel>> {
        let gate = self.search_gates.lock().get(term).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.failures.lock().candidate_query {
            return Err("connection reset".into());
        }
        let needle = term.to_lowercase();
        let mut found: Vec<_> = self
            .candidates
            .lock()
            .iter()
            .filter(|c| c.last_name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        Ok(found)
    }
}

#[async_trait]
impl<DB: Database> Insert<DB, NewCandidateModel, CandidateModel> for StoreStub {
    async fn insert(&self, item: NewCandidateModel) -> StubResult<Option<CandidateModel>> {
        let failures = self.failures.lock().clone();
        if failures.candidate_insert {
            return Err("insert rejected".into());
        }
        let model = item.into_model(Uuid::new_v4());
        self.candidates.lock().push(model.clone());
        if failures.insert_without_identity {
            return Ok(None);
        }
        Ok(Some(model))
    }
}

#[async_trait]
impl<DB: Database> UpdateById<DB, CandidateRecord> for StoreStub {
    async fn update_by_id(&self, id: Uuid, record: CandidateRecord) -> StubResult<()> {
        *self.update_calls.lock() += 1;
        if self.failures.lock().candidate_update {
            return Err("update rejected".into());
        }
        if let Some(model) = self.candidates.lock().iter_mut().find(|c| c.id == id) {
            model.apply(record);
        }
        Ok(())
    }
}

#[async_trait]
impl<DB: Database> Insert<DB, NewCandidateLogModel, CandidateLogModel> for StoreStub {
    async fn insert(&self, item: NewCandidateLogModel) -> StubResult<Option<CandidateLogModel>> {
        if self.failures.lock().log_insert {
            return Err("audit insert rejected".into());
        }
        let model = item.into_model(Uuid::new_v4());
        self.logs.lock().push(model.clone());
        Ok(Some(model))
    }
}

#[async_trait]
impl<DB: Database> LoadHistory<DB, CandidateLogModel> for StoreStub {
    async fn load_history(&self, owner_id: Uuid) -> StubResult<Vec<CandidateLogModel>> {
        if self.failures.lock().log_query {
            return Err("history unavailable".into());
        }
        let mut logs = self.logs_for(owner_id);
        logs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(logs)
    }
}

/// `parametrages` view of a [`StoreStub`]; touches reference entries only.
pub struct ReferenceTableStub(Arc<StoreStub>);

/// `utilisateurs` view of a [`StoreStub`]; touches operator accounts only.
pub struct OperatorTableStub(Arc<StoreStub>);

impl StoreStub {
    pub fn reference_table(self: &Arc<Self>) -> Arc<ReferenceTableStub> {
        Arc::new(ReferenceTableStub(self.clone()))
    }

    pub fn operator_table(self: &Arc<Self>) -> Arc<OperatorTableStub> {
        Arc::new(OperatorTableStub(self.clone()))
    }

    fn check_settings(&self) -> StubResult<()> {
        if self.failures.lock().settings {
            return Err("settings unavailable".into());
        }
        Ok(())
    }
}

#[async_trait]
impl<DB: Database> ListByCategory<DB, ReferenceCategory, ReferenceEntryModel> for ReferenceTableStub {
    async fn list_by_category(&self, category: ReferenceCategory) -> StubResult<Vec<ReferenceEntryModel>> {
        self.0.check_settings()?;
        let mut entries: Vec<_> = self
            .0
            .references
            .lock()
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.value.cmp(&b.value));
        Ok(entries)
    }
}

#[async_trait]
impl<DB: Database> Insert<DB, NewReferenceEntryModel, ReferenceEntryModel> for ReferenceTableStub {
    async fn insert(&self, item: NewReferenceEntryModel) -> StubResult<Option<ReferenceEntryModel>> {
        self.0.check_settings()?;
        let model = item.into_model(Uuid::new_v4());
        self.0.references.lock().push(model.clone());
        Ok(Some(model))
    }
}

#[async_trait]
impl<DB: Database> UpdateById<DB, ReferenceEntryRecord> for ReferenceTableStub {
    async fn update_by_id(&self, id: Uuid, record: ReferenceEntryRecord) -> StubResult<()> {
        self.0.check_settings()?;
        if let Some(entry) = self.0.references.lock().iter_mut().find(|e| e.id == id) {
            entry.value = record.value;
            entry.description = record.description;
            entry.updated_at = record.updated_at;
        }
        Ok(())
    }
}

#[async_trait]
impl<DB: Database> DeleteById<DB> for ReferenceTableStub {
    async fn delete_by_id(&self, id: Uuid) -> StubResult<usize> {
        self.0.check_settings()?;
        let mut references = self.0.references.lock();
        let before = references.len();
        references.retain(|e| e.id != id);
        Ok(before - references.len())
    }
}

#[async_trait]
impl<DB: Database> ListAll<DB, OperatorAccountModel> for OperatorTableStub {
    async fn list_all(&self) -> StubResult<Vec<OperatorAccountModel>> {
        self.0.check_settings()?;
        let mut operators = self.0.operators.lock().clone();
        operators.sort_by(|a, b| (&a.last_name, &a.first_name).cmp(&(&b.last_name, &b.first_name)));
        Ok(operators)
    }
}

#[async_trait]
impl<DB: Database> Insert<DB, NewOperatorAccountModel, OperatorAccountModel> for OperatorTableStub {
    async fn insert(&self, item: NewOperatorAccountModel) -> StubResult<Option<OperatorAccountModel>> {
        self.0.check_settings()?;
        let model = item.into_model(Uuid::new_v4());
        self.0.operators.lock().push(model.clone());
        Ok(Some(model))
    }
}

#[async_trait]
impl<DB: Database> UpdateById<DB, OperatorAccountRecord> for OperatorTableStub {
    async fn update_by_id(&self, id: Uuid, record: OperatorAccountRecord) -> StubResult<()> {
        self.0.check_settings()?;
        if let Some(operator) = self.0.operators.lock().iter_mut().find(|o| o.id == id) {
            operator.first_name = record.first_name;
            operator.last_name = record.last_name;
            operator.email = record.email;
            operator.active = record.active;
            operator.updated_at = record.updated_at;
        }
        Ok(())
    }
}

#[async_trait]
impl<DB: Database> DeleteById<DB> for OperatorTableStub {
    async fn delete_by_id(&self, id: Uuid) -> StubResult<usize> {
        self.0.check_settings()?;
        let mut operators = self.0.operators.lock();
        let before = operators.len();
        operators.retain(|o| o.id != id);
        Ok(before - operators.len())
    }
}

/// Clock that only moves when told to.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()),
        })
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn levels(&self) -> Vec<NotificationLevel> {
        self.sent.lock().iter().map(|n| n.level).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.sent.lock().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().push(notification);
    }
}
