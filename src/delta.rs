mod delta_error;
mod delta_operation;
mod text_edit;

use core::fmt::{self, Display};

pub use delta_error::DeltaError;
pub use delta_operation::DeltaOperation;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
pub use text_edit::TextEdit;

use crate::utils::{
    common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len,
    string_builder::StringBuilder,
};

/// An ordered list of operations describing exactly one document mutation.
///
/// Deltas are kept normalised: empty operations are dropped and consecutive
/// operations of the same kind are joined. Characters after the last
/// operation are implicitly retained.
///
/// ```
/// use track_changes::Delta;
///
/// let delta = Delta::new().retain(4).delete(3).insert("dog");
///
/// assert_eq!(delta.apply("The cat sat.").unwrap(), "The dog sat.");
/// assert_eq!(delta.to_string(), "retain 4, delete 3, insert \"dog\"");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<DeltaOperation>", into = "Vec<DeltaOperation>"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Delta {
    operations: Vec<DeltaOperation>,
}

impl Delta {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn retain(mut self, length: usize) -> Self {
        self.push(DeltaOperation::Retain(length));
        self
    }

    #[must_use]
    pub fn insert(mut self, text: impl Into<String>) -> Self {
        self.push(DeltaOperation::Insert(text.into()));
        self
    }

    #[must_use]
    pub fn delete(mut self, length: usize) -> Self {
        self.push(DeltaOperation::Delete(length));
        self
    }

    /// Appends an operation, dropping it if it's a no-op and joining it with
    /// the last operation if they are of the same kind.
    pub fn push(&mut self, operation: DeltaOperation) {
        if operation.is_empty() {
            return;
        }

        let remainder = match self.operations.last_mut() {
            Some(last) => last.try_join(operation),
            None => Some(operation),
        };

        self.operations.extend(remainder);
    }

    /// Creates a delta turning `before` into `after` by replacing the single
    /// span between their common prefix and common suffix.
    #[must_use]
    pub fn from_strings(before: &str, after: &str) -> Self {
        let before_chars = before.chars().collect::<Vec<_>>();
        let after_chars = after.chars().collect::<Vec<_>>();

        let prefix = common_prefix_len(
            before_chars.as_slice(),
            0..before_chars.len(),
            after_chars.as_slice(),
            0..after_chars.len(),
        );
        let suffix = common_suffix_len(
            before_chars.as_slice(),
            prefix..before_chars.len(),
            after_chars.as_slice(),
            prefix..after_chars.len(),
        );

        Self::new()
            .retain(prefix)
            .delete(before_chars.len() - prefix - suffix)
            .insert(
                after_chars[prefix..after_chars.len() - suffix]
                    .iter()
                    .collect::<String>(),
            )
    }

    #[must_use]
    pub fn operations(&self) -> &[DeltaOperation] { &self.operations }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.operations.is_empty() }

    /// Whether applying the delta changes the text at all.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.operations
            .iter()
            .all(|operation| matches!(operation, DeltaOperation::Retain(_)))
    }

    /// Number of characters of the original text the delta covers.
    #[must_use]
    pub fn base_len(&self) -> usize {
        self.operations
            .iter()
            .map(DeltaOperation::base_len)
            .fold(0, usize::saturating_add)
    }

    /// Number of characters the covered part of the text has after the delta
    /// is applied.
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.operations
            .iter()
            .map(|operation| match operation {
                DeltaOperation::Retain(length) => *length,
                DeltaOperation::Insert(text) => text.chars().count(),
                DeltaOperation::Delete(_) => 0,
            })
            .fold(0, usize::saturating_add)
    }

    /// Checks that the delta can be applied to a text of `length` characters.
    ///
    /// # Errors
    ///
    /// Returns `DeltaError::LengthExceedsText` for the first retain or delete
    /// reaching past the end of the text.
    pub fn check_base_length(&self, length: usize) -> Result<(), DeltaError> {
        let mut position = 0;

        for operation in &self.operations {
            let requested = operation.base_len();
            let available = length.saturating_sub(position);

            if requested > available {
                return Err(DeltaError::LengthExceedsText {
                    position,
                    requested,
                    available,
                });
            }

            position = position.saturating_add(requested);
        }

        Ok(())
    }

    /// Applies the delta to `text` and returns the mutated text.
    ///
    /// # Errors
    ///
    /// Returns `DeltaError::LengthExceedsText` if the delta retains or deletes
    /// characters past the end of `text`.
    pub fn apply(&self, text: &str) -> Result<String, DeltaError> {
        self.check_base_length(text.chars().count())?;

        let mut builder = StringBuilder::new(text);

        for operation in &self.operations {
            match operation {
                DeltaOperation::Retain(length) => builder.retain(*length),
                DeltaOperation::Insert(text) => builder.insert(text),
                DeltaOperation::Delete(length) => {
                    builder.delete(*length);
                }
            }
        }

        Ok(builder.build())
    }

    /// Splits the delta into the hunks it replaces in `before`, the text the
    /// delta was applied to. Neighbouring deletes and inserts form a single
    /// hunk. Ranges reaching past the end of `before` are trusted, only the
    /// captured removed text is truncated.
    #[must_use]
    pub fn to_edits(&self, before: &str) -> Vec<TextEdit> {
        let mut edits = Vec::new();
        let mut builder = StringBuilder::new(before);
        let mut before_position: usize = 0;
        let mut after_position: usize = 0;
        let mut pending: Option<TextEdit> = None;

        for operation in &self.operations {
            match operation {
                DeltaOperation::Retain(length) => {
                    edits.extend(pending.take());

                    builder.retain(*length);
                    before_position = before_position.saturating_add(*length);
                    after_position = after_position.saturating_add(*length);
                }
                DeltaOperation::Delete(length) => {
                    let edit = pending
                        .get_or_insert_with(|| TextEdit::empty_at(before_position, after_position));

                    edit.removed_text.push_str(&builder.delete(*length));
                    before_position = before_position.saturating_add(*length);
                    edit.before_end = before_position;
                }
                DeltaOperation::Insert(text) => {
                    let edit = pending
                        .get_or_insert_with(|| TextEdit::empty_at(before_position, after_position));

                    edit.inserted_text.push_str(text);
                    after_position = after_position.saturating_add(text.chars().count());
                }
            }
        }

        edits.extend(pending);
        edits
    }
}

impl From<Vec<DeltaOperation>> for Delta {
    fn from(operations: Vec<DeltaOperation>) -> Self {
        let mut delta = Self::new();

        for operation in operations {
            delta.push(operation);
        }

        delta
    }
}

impl From<Delta> for Vec<DeltaOperation> {
    fn from(delta: Delta) -> Self { delta.operations }
}

impl FromIterator<DeltaOperation> for Delta {
    fn from_iter<I: IntoIterator<Item = DeltaOperation>>(iter: I) -> Self {
        let mut delta = Self::new();

        for operation in iter {
            delta.push(operation);
        }

        delta
    }
}

impl<'a> IntoIterator for &'a Delta {
    type Item = &'a DeltaOperation;
    type IntoIter = core::slice::Iter<'a, DeltaOperation>;

    fn into_iter(self) -> Self::IntoIter { self.operations.iter() }
}

impl Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, operation) in self.operations.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{operation}")?;
        }

        Ok(())
    }
}
