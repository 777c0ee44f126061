/// A customer as held in UI state and persisted in the store.
///
/// Documents cross the store boundary as untyped field maps, so the model
/// itself never serializes; the UI needs only `Clone + PartialEq`.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    /// Store-assigned document id, immutable after creation.
    pub id: String,
    /// Free-text name, no format constraint.
    pub name: String,
    /// Digits only, validated at input time.
    pub phone: String,
}
