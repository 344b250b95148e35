use chrono::{DateTime, Utc};
use log::debug;

use crate::{
    tracking::{change_store::ChangeStore, lifecycle::Lifecycle},
    types::{change_id::ChangeId, mutation::LocalEdit, tracked_change::TrackedChange},
};

/// Turns local edits into tracked changes attributed to one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecorder {
    author: String,
}

impl ChangeRecorder {
    #[must_use]
    pub fn new(author: String) -> Self { Self { author } }

    #[must_use]
    pub fn author(&self) -> &str { &self.author }

    /// Records `edit` with the current time. See `record_at`.
    pub fn record(
        &self,
        lifecycle: &Lifecycle,
        store: &mut ChangeStore,
        edit: &LocalEdit,
    ) -> Vec<ChangeId> {
        self.record_at(lifecycle, store, edit, Utc::now())
    }

    /// Appends a deletion for every hunk that removed text and an insertion
    /// for every hunk that inserted text, both placed at the hunk's position
    /// in the document after the edit. Returns the ids of the new changes,
    /// nothing is recorded while tracking is disabled.
    pub fn record_at(
        &self,
        lifecycle: &Lifecycle,
        store: &mut ChangeStore,
        edit: &LocalEdit,
        timestamp: DateTime<Utc>,
    ) -> Vec<ChangeId> {
        if !lifecycle.is_enabled() {
            debug!("Tracking is disabled, not recording {} edits", edit.edits.len());
            return Vec::new();
        }

        let mut ids = Vec::with_capacity(edit.edits.len() * 2);

        for text_edit in &edit.edits {
            if text_edit.removes() {
                let change = TrackedChange::deletion(
                    text_edit.after_start,
                    text_edit.removed_text.clone(),
                    edit.direction,
                    self.author.clone(),
                    timestamp,
                );
                debug!("Recording {change}");
                ids.push(store.insert(change));
            }

            if text_edit.inserts() {
                let change = TrackedChange::insertion(
                    text_edit.after_start,
                    text_edit.inserted_text.clone(),
                    self.author.clone(),
                    timestamp,
                );
                debug!("Recording {change}");
                ids.push(store.insert(change));
            }
        }

        ids
    }
}
