use sqlx::Database;
use staffing_core_api::domain::ReferenceCategory;

use crate::models::{
    audit::{CandidateLogModel, NewCandidateLogModel},
    candidate::{CandidateModel, CandidateRecord, NewCandidateModel},
    settings::{
        NewOperatorAccountModel, NewReferenceEntryModel, OperatorAccountModel,
        OperatorAccountRecord, ReferenceEntryModel, ReferenceEntryRecord,
    },
};

use super::{
    delete_by_id::DeleteById, insert::Insert, list_all::ListAll,
    list_by_category::ListByCategory, load::Load, load_history::LoadHistory,
    search_by_name::SearchByName, update_by_id::UpdateById,
};

/// Everything the candidate directory and editor need from the `candidats` table.
///
/// Blanket-implemented, so services can hold an `Arc<dyn CandidateRepository<DB>>`.
pub trait CandidateRepository<DB: Database>:
    Load<DB, CandidateModel>
    + SearchByName<DB, CandidateModel>
    + Insert<DB, NewCandidateModel, CandidateModel>
    + UpdateById<DB, CandidateRecord>
{
}

impl<DB: Database, R> CandidateRepository<DB> for R where
    R: Load<DB, CandidateModel>
        + SearchByName<DB, CandidateModel>
        + Insert<DB, NewCandidateModel, CandidateModel>
        + UpdateById<DB, CandidateRecord>
{
}

/// Append and read access to `candidats_logs`. No update, no delete.
pub trait CandidateLogRepository<DB: Database>:
    Insert<DB, NewCandidateLogModel, CandidateLogModel> + LoadHistory<DB, CandidateLogModel>
{
}

impl<DB: Database, R> CandidateLogRepository<DB> for R where
    R: Insert<DB, NewCandidateLogModel, CandidateLogModel> + LoadHistory<DB, CandidateLogModel>
{
}

pub trait ReferenceEntryRepository<DB: Database>:
    ListByCategory<DB, ReferenceCategory, ReferenceEntryModel>
    + Insert<DB, NewReferenceEntryModel, ReferenceEntryModel>
    + UpdateById<DB, ReferenceEntryRecord>
    + DeleteById<DB>
{
}

impl<DB: Database, R> ReferenceEntryRepository<DB> for R where
    R: ListByCategory<DB, ReferenceCategory, ReferenceEntryModel>
        + Insert<DB, NewReferenceEntryModel, ReferenceEntryModel>
        + UpdateById<DB, ReferenceEntryRecord>
        + DeleteById<DB>
{
}

pub trait OperatorAccountRepository<DB: Database>:
    ListAll<DB, OperatorAccountModel>
    + Insert<DB, NewOperatorAccountModel, OperatorAccountModel>
    + UpdateById<DB, OperatorAccountRecord>
    + DeleteById<DB>
{
}

impl<DB: Database, R> OperatorAccountRepository<DB> for R where
    R: ListAll<DB, OperatorAccountModel>
        + Insert<DB, NewOperatorAccountModel, OperatorAccountModel>
        + UpdateById<DB, OperatorAccountRecord>
        + DeleteById<DB>
{
}
