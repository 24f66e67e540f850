use uuid::Uuid;

/// Trait for stored rows that carry the identity the store assigned to them
pub trait Identifiable {
    /// Returns the unique identifier of the row
    fn get_id(&self) -> Uuid;
}
