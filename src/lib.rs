//! Keeps authored insertions and deletions ("tracked changes") anchored to a
//! shared text document while it is edited locally, by remote collaborators
//! and by undo/redo.
//!
//! Every mutation of the document is reported to a `TrackChanges` session as
//! a `Delta` tagged with its `Origin`. The session moves, shrinks or drops
//! the existing changes to follow the text and records local edits as new
//! changes while tracking is enabled.
//!
//! ```
//! use track_changes::{ChangeKind, Delta, Mutation, TrackChanges, TrackingConfig};
//!
//! let session = TrackChanges::new(TrackingConfig::new("ada").enabled(true)).unwrap();
//!
//! // "The cat sat." -> "The sat."
//! session.notify(Mutation::local(Delta::new().retain(4).delete(4), "The cat sat."));
//! // "The sat." -> "Oh, The sat."
//! session.notify(Mutation::remote(Delta::new().insert("Oh, ")));
//!
//! let changes = session.get_changes();
//! assert_eq!(changes[0].kind(), ChangeKind::Deletion);
//! assert_eq!(changes[0].start(), 8);
//! assert_eq!(changes[0].content(), "cat ");
//! ```

mod config;
mod consts;
mod delta;
mod errors;
mod track_changes;
mod tracking;
mod types;
mod utils;

pub use config::TrackingConfig;
pub use delta::{Delta, DeltaError, DeltaOperation, TextEdit};
pub use errors::ConfigError;
pub use track_changes::{ListenerId, TrackChanges};
pub use tracking::{
    change_recorder::ChangeRecorder,
    change_store::ChangeStore,
    lifecycle::Lifecycle,
    mutation_bridge::{BridgeState, Dispatch, MutationBridge},
    position_tracker::adjust_positions,
};
pub use types::{
    change_id::ChangeId,
    mutation::{LocalEdit, Mutation},
    origin::Origin,
    tracked_change::{ChangeKind, ChangeSpan, DeletionDirection, TrackedChange},
};

#[cfg(feature = "wasm")]
pub mod wasm;
