use core::fmt::{self, Display};

use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::change_id::ChangeId;

/// Which side of a deletion anchor the removed text was erased from.
/// Only a renderer cares about it, position tracking ignores it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeletionDirection {
    /// Erased towards the start of the document, e.g. with backspace.
    Backward,

    /// Erased towards the end of the document, e.g. with the delete key.
    Forward,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Insertion,
    Deletion,
}

/// Where a tracked change lives in the document.
///
/// An insertion covers the half-open range `start..end` of still present
/// inserted text. A deletion is a zero-width anchor at `start`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeSpan {
    Insertion {
        start: usize,
        end: usize,
    },

    Deletion {
        start: usize,

        #[cfg_attr(feature = "serde", serde(default, rename = "directionHint"))]
        direction: Option<DeletionDirection>,
    },
}

impl ChangeSpan {
    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeSpan::Insertion { .. } => ChangeKind::Insertion,
            ChangeSpan::Deletion { .. } => ChangeKind::Deletion,
        }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        match self {
            ChangeSpan::Insertion { start, .. } | ChangeSpan::Deletion { start, .. } => *start,
        }
    }

    /// Returns the end of the live range, which only insertions have.
    #[must_use]
    pub fn end(&self) -> Option<usize> {
        match self {
            ChangeSpan::Insertion { end, .. } => Some(*end),
            ChangeSpan::Deletion { .. } => None,
        }
    }
}

/// One recorded edit together with its provenance.
///
/// `content` is a snapshot taken when the edit was recorded and never changes:
/// for insertions it is the inserted text (even if parts of it have been
/// deleted since), for deletions the removed text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedChange {
    id: ChangeId,

    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) span: ChangeSpan,

    content: String,
    author: String,
    timestamp: DateTime<Utc>,
}

impl TrackedChange {
    /// Creates an insertion occupying `start..start + content.chars().count()`.
    #[must_use]
    pub fn insertion(
        start: usize,
        content: String,
        author: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let end = start.saturating_add(content.chars().count());

        Self {
            id: ChangeId::generate(),
            span: ChangeSpan::Insertion { start, end },
            content,
            author,
            timestamp,
        }
    }

    /// Creates a deletion anchored at `start`.
    #[must_use]
    pub fn deletion(
        start: usize,
        content: String,
        direction: Option<DeletionDirection>,
        author: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ChangeId::generate(),
            span: ChangeSpan::Deletion { start, direction },
            content,
            author,
            timestamp,
        }
    }

    #[must_use]
    pub fn id(&self) -> ChangeId { self.id }

    #[must_use]
    pub fn kind(&self) -> ChangeKind { self.span.kind() }

    #[must_use]
    pub fn span(&self) -> ChangeSpan { self.span }

    #[must_use]
    pub fn start(&self) -> usize { self.span.start() }

    #[must_use]
    pub fn end(&self) -> Option<usize> { self.span.end() }

    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    #[must_use]
    pub fn author(&self) -> &str { &self.author }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }

    #[must_use]
    pub fn direction_hint(&self) -> Option<DeletionDirection> {
        match self.span {
            ChangeSpan::Deletion { direction, .. } => direction,
            ChangeSpan::Insertion { .. } => None,
        }
    }

    /// Number of characters of the change still present in the document.
    /// Always 0 for deletions.
    #[must_use]
    pub fn live_len(&self) -> usize {
        match self.span {
            ChangeSpan::Insertion { start, end } => end.saturating_sub(start),
            ChangeSpan::Deletion { .. } => 0,
        }
    }
}

impl Display for TrackedChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            ChangeSpan::Insertion { start, end } => write!(
                f,
                "<insertion '{}' at {start}..{end} by {}>",
                self.content.replace('\n', "\\n"),
                self.author
            ),
            ChangeSpan::Deletion { start, .. } => write!(
                f,
                "<deletion '{}' at {start} by {}>",
                self.content.replace('\n', "\\n"),
                self.author
            ),
        }
    }
}
