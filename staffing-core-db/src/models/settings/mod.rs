pub mod operator_account;
pub mod reference_entry;

pub use operator_account::*;
pub use reference_entry::*;
