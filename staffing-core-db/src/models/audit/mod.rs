pub mod candidate_log;

pub use candidate_log::*;
