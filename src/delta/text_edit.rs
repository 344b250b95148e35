#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One hunk of a local editing transaction: the characters
/// `before_start..before_end` of the document before the transaction were
/// replaced with `inserted_text`, which starts at `after_start` in the
/// document after the transaction.
///
/// `removed_text` holds the replaced characters of the old document so that
/// they can be kept after they disappear from the live text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextEdit {
    pub before_start: usize,
    pub before_end: usize,
    pub after_start: usize,
    pub removed_text: String,
    pub inserted_text: String,
}

impl TextEdit {
    /// Creates an edit, slicing the removed characters out of
    /// `before_document`. The slice is truncated if the range reaches past
    /// the end of the document.
    #[must_use]
    pub fn new(
        before_start: usize,
        before_end: usize,
        after_start: usize,
        inserted_text: String,
        before_document: &str,
    ) -> Self {
        let before_end = before_end.max(before_start);
        let removed_text = before_document
            .chars()
            .skip(before_start)
            .take(before_end - before_start)
            .collect();

        Self {
            before_start,
            before_end,
            after_start,
            removed_text,
            inserted_text,
        }
    }

    pub(crate) fn empty_at(before_start: usize, after_start: usize) -> Self {
        Self {
            before_start,
            before_end: before_start,
            after_start,
            ..Self::default()
        }
    }

    /// Whether the edit removed any text.
    #[must_use]
    pub fn removes(&self) -> bool { self.before_end > self.before_start }

    /// Whether the edit inserted any text.
    #[must_use]
    pub fn inserts(&self) -> bool { !self.inserted_text.is_empty() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new_slices_removed_text() {
        let edit = TextEdit::new(4, 7, 4, "dog".to_owned(), "The cat sat.");

        assert_eq!(edit.removed_text, "cat");
        assert!(edit.removes());
        assert!(edit.inserts());
    }

    #[test]
    fn test_new_truncates_out_of_range() {
        let edit = TextEdit::new(2, 10, 2, String::new(), "abcd");

        assert_eq!(edit.removed_text, "cd");
        assert!(!edit.inserts());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let edit = TextEdit::new(3, 1, 3, "x".to_owned(), "abcd");

        assert_eq!(edit.before_end, 3);
        assert!(!edit.removes());
    }
}
