#[allow(clippy::module_inception)]
pub mod candidate;

pub use candidate::*;
