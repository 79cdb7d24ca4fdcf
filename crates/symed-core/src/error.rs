use thiserror::Error;

/// Recoverable failures of editing operations.
///
/// All of these abort the active operation, roll back any partially-applied
/// command group and return the engine to its idle state; they are surfaced
/// to the user as non-fatal notifications. Programmer errors (violated
/// collaborator contracts) are `debug_assert!`s instead, never error values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Malformed or unrecognized serialized payload or enumerated token.
    #[error("unrecognized or malformed data: {0}")]
    Format(String),

    /// A command was applied against a document missing a referenced element
    /// (or inserting a duplicate identifier).
    #[error("operation precondition violated: {0}")]
    Precondition(String),

    /// The unique-name search exceeded its attempt bound.
    #[error("no free name found for {name:?}")]
    NameExhaustion { name: String },
}
