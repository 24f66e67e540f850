pub mod identifiable;
pub mod audit;
pub mod candidate;
pub mod settings;

// Re-exports
pub use identifiable::*;
pub use audit::*;
pub use candidate::*;
pub use settings::*;
