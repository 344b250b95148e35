use thiserror::Error;

/// Error type for deltas that do not fit the text they are applied to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeltaError {
    /// The delta references a range that exceeds the text length
    #[error(
        "Invalid delta: attempting to access {requested} characters starting at position \
         {position}, but the text only has {available} characters remaining"
    )]
    LengthExceedsText {
        /// The position where the operation starts
        position: usize,
        /// The number of characters requested
        requested: usize,
        /// The number of characters available from the position
        available: usize,
    },
}
