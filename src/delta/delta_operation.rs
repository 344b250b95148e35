use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single step of a document mutation, addressed relative to the end of the
/// previous step. Serialized as `{"retain": n}`, `{"insert": "text"}` or
/// `{"delete": n}`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeltaOperation {
    /// Keep the next `n` characters.
    Retain(usize),

    /// Insert text before the next character.
    Insert(String),

    /// Remove the next `n` characters.
    Delete(usize),
}

impl DeltaOperation {
    /// Number of characters the operation retains, inserts or deletes.
    pub fn len(&self) -> usize {
        match self {
            DeltaOperation::Retain(length) | DeltaOperation::Delete(length) => *length,
            DeltaOperation::Insert(text) => text.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            DeltaOperation::Retain(length) | DeltaOperation::Delete(length) => *length == 0,
            DeltaOperation::Insert(text) => text.is_empty(),
        }
    }

    /// Number of characters of the text before the mutation that the
    /// operation consumes.
    pub fn base_len(&self) -> usize {
        match self {
            DeltaOperation::Retain(length) | DeltaOperation::Delete(length) => *length,
            DeltaOperation::Insert(_) => 0,
        }
    }

    /// Tries to extend `self` with the following operation, returning it back
    /// if they are of different kinds. Joined lengths saturate at `usize::MAX`.
    pub(crate) fn try_join(&mut self, next: DeltaOperation) -> Option<DeltaOperation> {
        match (self, next) {
            (DeltaOperation::Retain(length), DeltaOperation::Retain(other))
            | (DeltaOperation::Delete(length), DeltaOperation::Delete(other)) => {
                *length = length.saturating_add(other);
                None
            }
            (DeltaOperation::Insert(text), DeltaOperation::Insert(other)) => {
                text.push_str(&other);
                None
            }
            (_, next) => Some(next),
        }
    }
}

impl Display for DeltaOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeltaOperation::Retain(length) => write!(f, "retain {length}"),
            DeltaOperation::Insert(text) => write!(f, "insert \"{}\"", text.replace('\n', "\\n")),
            DeltaOperation::Delete(length) => write!(f, "delete {length}"),
        }
    }
}
