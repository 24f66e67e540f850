pub mod load;
pub mod search_by_name;
pub mod insert;
pub mod update_by_id;
pub mod delete_by_id;
pub mod load_history;
pub mod list_by_category;
pub mod list_all;
pub mod entity_repositories;

// Re-exports
pub use load::*;
pub use search_by_name::*;
pub use insert::*;
pub use update_by_id::*;
pub use delete_by_id::*;
pub use load_history::*;
pub use list_by_category::*;
pub use list_all::*;
pub use entity_repositories::*;
