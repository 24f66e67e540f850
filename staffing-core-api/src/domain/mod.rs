pub mod audit_event;
pub mod candidate;
pub mod draft;
pub mod editor_state;
pub mod history;
pub mod notification;
pub mod reference;
pub mod sector;

// Re-exports
pub use audit_event::*;
pub use candidate::*;
pub use draft::*;
pub use editor_state::*;
pub use history::*;
pub use notification::*;
pub use reference::*;
pub use sector::*;
