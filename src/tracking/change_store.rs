use log::debug;

use crate::types::{change_id::ChangeId, tracked_change::TrackedChange};

/// Owns every `TrackedChange` of a session, keyed by its id and kept in the
/// order the changes were recorded.
#[derive(Debug, Clone, Default)]
pub struct ChangeStore {
    changes: Vec<TrackedChange>,
}

impl ChangeStore {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, change: TrackedChange) -> ChangeId {
        let id = change.id();
        self.changes.push(change);
        id
    }

    #[must_use]
    pub fn get(&self, id: ChangeId) -> Option<&TrackedChange> {
        self.changes.iter().find(|change| change.id() == id)
    }

    /// Removes the change with the given id. Removing an id that is not
    /// (or no longer) stored is a no-op.
    pub fn remove(&mut self, id: ChangeId) -> Option<TrackedChange> {
        let Some(index) = self.changes.iter().position(|change| change.id() == id) else {
            debug!("Ignoring removal of unknown change {id}");
            return None;
        };

        Some(self.changes.remove(index))
    }

    pub fn clear(&mut self) { self.changes.clear(); }

    #[must_use]
    pub fn len(&self) -> usize { self.changes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.changes.is_empty() }

    /// Iterates over the changes in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &TrackedChange> { self.changes.iter() }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut TrackedChange> {
        self.changes.iter_mut()
    }

    pub(crate) fn retain_mut(&mut self, keep: impl FnMut(&mut TrackedChange) -> bool) {
        self.changes.retain_mut(keep);
    }

    /// Returns a copy of every change in document order. Changes starting at
    /// the same position keep the order they were recorded in.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TrackedChange> {
        let mut snapshot = self.changes.clone();
        snapshot.sort_by_key(TrackedChange::start);
        snapshot
    }
}
