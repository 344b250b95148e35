#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    delta::{Delta, TextEdit},
    types::{origin::Origin, tracked_change::DeletionDirection},
};

/// What a local editing transaction did, expressed as the hunks it replaced
/// in the document before the transaction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalEdit {
    pub edits: Vec<TextEdit>,

    /// Set when the transaction was an erase in a known direction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Option<DeletionDirection>,
}

impl LocalEdit {
    #[must_use]
    pub fn new(edits: Vec<TextEdit>) -> Self {
        Self {
            edits,
            direction: None,
        }
    }

    #[must_use]
    pub fn with_direction(mut self, direction: DeletionDirection) -> Self {
        self.direction = Some(direction);
        self
    }
}

/// A notification that the shared document has been mutated.
///
/// `delta` describes the change exactly as the document engine applied it.
/// Local mutations may carry the `LocalEdit` to record; mutations of any
/// other origin never create tracked changes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub origin: Origin,
    pub delta: Delta,

    #[cfg_attr(feature = "serde", serde(default))]
    pub edit: Option<LocalEdit>,

    /// Length of the document before the mutation, if known. Only used to
    /// detect deltas that don't fit the document.
    #[cfg_attr(feature = "serde", serde(default))]
    pub document_len: Option<usize>,
}

impl Mutation {
    #[must_use]
    pub fn new(origin: Origin, delta: Delta) -> Self {
        Self {
            origin,
            delta,
            edit: None,
            document_len: None,
        }
    }

    /// A local mutation of `before`, the document text prior to applying
    /// `delta`. The hunks to record are derived from the delta.
    #[must_use]
    pub fn local(delta: Delta, before: &str) -> Self {
        let edit = LocalEdit::new(delta.to_edits(before));

        Self {
            origin: Origin::Local,
            delta,
            edit: Some(edit),
            document_len: Some(before.chars().count()),
        }
    }

    /// A local mutation whose hunks have been computed by the editor.
    #[must_use]
    pub fn local_with_edit(delta: Delta, edit: LocalEdit) -> Self {
        Self {
            edit: Some(edit),
            ..Self::new(Origin::Local, delta)
        }
    }

    #[must_use]
    pub fn remote(delta: Delta) -> Self { Self::new(Origin::Remote, delta) }

    #[must_use]
    pub fn undo_redo(delta: Delta) -> Self { Self::new(Origin::UndoRedo, delta) }

    #[must_use]
    pub fn decoration(delta: Delta) -> Self { Self::new(Origin::Decoration, delta) }

    /// Marks the erase direction of a local edit. Has no effect on mutations
    /// without a `LocalEdit`.
    #[must_use]
    pub fn with_direction(mut self, direction: DeletionDirection) -> Self {
        if let Some(edit) = self.edit.as_mut() {
            edit.direction = Some(direction);
        }
        self
    }

    #[must_use]
    pub fn with_document_len(mut self, document_len: usize) -> Self {
        self.document_len = Some(document_len);
        self
    }
}
