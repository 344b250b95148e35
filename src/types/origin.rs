use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Provenance of a document mutation. Positions are adjusted for every
/// origin but only `Local` edits become new tracked changes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Typed, pasted or otherwise produced by the user of this session.
    Local,

    /// Applied by the replication engine on behalf of another collaborator.
    Remote,

    /// Replay of an earlier transaction by the undo manager.
    UndoRedo,

    /// Produced by the rendering layer while updating its decorations.
    Decoration,
}

impl Origin {
    /// Whether a mutation of this origin may create new tracked changes.
    #[must_use]
    pub fn is_recordable(self) -> bool { matches!(self, Origin::Local) }
}

impl Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Local => write!(f, "local"),
            Origin::Remote => write!(f, "remote"),
            Origin::UndoRedo => write!(f, "undo/redo"),
            Origin::Decoration => write!(f, "decoration"),
        }
    }
}
