//! Candidate lifecycle services for the staffing back-office.
//!
//! Every service is generic over the `sqlx` database of its repositories and
//! holds them as trait objects, so the same code runs against PostgreSQL or
//! an in-memory store.

pub mod audit_logger;
pub mod candidate_dialog;
pub mod candidate_directory;
pub mod candidate_editor;
pub mod history_viewer;
pub mod settings_catalog;

pub use audit_logger::AuditLogger;
pub use candidate_dialog::CandidateDialog;
pub use candidate_directory::{CandidateDirectory, DirectoryListing};
pub use candidate_editor::CandidateEditor;
pub use history_viewer::HistoryViewer;
pub use settings_catalog::SettingsCatalog;

#[cfg(test)]
pub mod test_helper;
