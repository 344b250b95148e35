use core::{
    cell::{Cell, RefCell},
    fmt,
};
use std::rc::Rc;

use log::{debug, warn};

use crate::{
    config::TrackingConfig,
    errors::ConfigError,
    tracking::{
        change_recorder::ChangeRecorder,
        change_store::ChangeStore,
        lifecycle::Lifecycle,
        mutation_bridge::{BridgeState, Dispatch, MutationBridge},
        position_tracker::adjust_positions,
    },
    types::{change_id::ChangeId, mutation::Mutation, tracked_change::TrackedChange},
};

/// Identifies a listener registered with `TrackChanges::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Rc<dyn Fn(&[TrackedChange])>;

/// The tracked changes of one editing session.
///
/// Feed every mutation of the shared document to `notify`, whatever its
/// origin. All positions are adjusted for each of them, and local edits are
/// additionally recorded as new changes while tracking is enabled.
///
/// ```
/// use track_changes::{Delta, Mutation, TrackChanges, TrackingConfig};
///
/// let session = TrackChanges::new(TrackingConfig::new("ada").enabled(true)).unwrap();
///
/// session.notify(Mutation::local(Delta::new().insert("hello"), ""));
/// session.notify(Mutation::remote(Delta::new().insert("Oh, ")));
///
/// let changes = session.get_changes();
/// assert_eq!(changes.len(), 1);
/// assert_eq!((changes[0].start(), changes[0].end()), (4, Some(9)));
/// ```
///
/// Every method takes `&self` so that listeners may call back into the
/// session. Mutations notified from a listener are processed after the one
/// being processed, and decoration updates are ignored as echoes.
pub struct TrackChanges {
    store: RefCell<ChangeStore>,
    lifecycle: Lifecycle,
    recorder: ChangeRecorder,
    bridge: MutationBridge,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener_id: Cell<usize>,
}

impl TrackChanges {
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: TrackingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            store: RefCell::new(ChangeStore::new()),
            lifecycle: Lifecycle::new(config.enabled),
            recorder: ChangeRecorder::new(config.author),
            bridge: MutationBridge::new(),
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
        })
    }

    pub fn enable(&self) { self.lifecycle.enable(); }

    pub fn disable(&self) { self.lifecycle.disable(); }

    #[must_use]
    pub fn is_enabled(&self) -> bool { self.lifecycle.is_enabled() }

    #[must_use]
    pub fn author(&self) -> &str { self.recorder.author() }

    /// Forgets every tracked change.
    pub fn clear_all(&self) {
        let mut store = self.store.borrow_mut();
        debug!("Clearing {} tracked changes", store.len());
        store.clear();
    }

    /// Returns a snapshot of all tracked changes in document order. The
    /// snapshot is not updated by later mutations.
    #[must_use]
    pub fn get_changes(&self) -> Vec<TrackedChange> { self.store.borrow().snapshot() }

    #[must_use]
    pub fn get_change(&self, id: ChangeId) -> Option<TrackedChange> {
        self.store.borrow().get(id).cloned()
    }

    /// Stops tracking a single change, e.g. once a reviewer accepted or
    /// rejected it. Unknown ids are ignored.
    pub fn remove_change(&self, id: ChangeId) -> Option<TrackedChange> {
        self.store.borrow_mut().remove(id)
    }

    #[must_use]
    pub fn change_count(&self) -> usize { self.store.borrow().len() }

    #[must_use]
    pub fn bridge_state(&self) -> BridgeState { self.bridge.state() }

    /// Processes a mutation of the shared document. Must be called for every
    /// mutation, in the order the document applied them.
    pub fn notify(&self, mutation: Mutation) -> Dispatch {
        self.bridge.dispatch(mutation, |mutation| self.process(mutation))
    }

    /// Registers a callback receiving a fresh snapshot after each processed
    /// mutation.
    pub fn subscribe(&self, listener: impl Fn(&[TrackedChange]) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);

        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Returns whether a listener was registered with the given id.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let count = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);

        listeners.len() != count
    }

    fn process(&self, mutation: &Mutation) {
        debug!("Processing {} mutation: {}", mutation.origin, mutation.delta);

        if let Some(document_len) = mutation.document_len {
            if let Err(error) = mutation.delta.check_base_length(document_len) {
                warn!("Tracking positions through a malformed delta: {error}");
            }
        }

        {
            let mut store = self.store.borrow_mut();
            adjust_positions(&mut store, &mutation.delta);

            if mutation.origin.is_recordable() {
                if let Some(edit) = &mutation.edit {
                    self.recorder.record(&self.lifecycle, &mut store, edit);
                }
            }
        }

        self.notify_listeners();
    }

    fn notify_listeners(&self) {
        let listeners = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect::<Vec<_>>();

        if listeners.is_empty() {
            return;
        }

        let snapshot = self.get_changes();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl fmt::Debug for TrackChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackChanges")
            .field("store", &self.store)
            .field("lifecycle", &self.lifecycle)
            .field("recorder", &self.recorder)
            .field("bridge", &self.bridge)
            .field("listeners", &self.listeners.borrow().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Delta,
        types::tracked_change::{ChangeKind, ChangeSpan, DeletionDirection},
    };

    fn session() -> TrackChanges {
        TrackChanges::new(TrackingConfig::new("ada").enabled(true)).unwrap()
    }

    fn spans(session: &TrackChanges) -> Vec<ChangeSpan> {
        session.get_changes().iter().map(TrackedChange::span).collect()
    }

    #[test]
    fn test_local_insert_into_empty_document() {
        let session = session();

        session.notify(Mutation::local(Delta::new().insert("hello"), ""));

        let changes = session.get_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind(), ChangeKind::Insertion);
        assert_eq!(changes[0].span(), ChangeSpan::Insertion { start: 0, end: 5 });
        assert_eq!(changes[0].content(), "hello");
        assert_eq!(changes[0].author(), "ada");
    }

    #[test]
    fn test_forward_delete_then_remote_insert() {
        let session = session();

        session.notify(
            Mutation::local(Delta::new().retain(4).delete(3), "The cat sat.")
                .with_direction(DeletionDirection::Forward),
        );
        session.notify(Mutation::remote(Delta::new().insert("big ")));

        let changes = session.get_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].content(), "cat");
        assert_eq!(
            changes[0].span(),
            ChangeSpan::Deletion {
                start: 8,
                direction: Some(DeletionDirection::Forward),
            }
        );
    }

    #[test]
    fn test_typing_inside_own_insertion_extends_it() {
        let session = session();

        session.notify(Mutation::local(Delta::new().insert("helo"), ""));
        session.notify(Mutation::local(Delta::new().retain(3).insert("l"), "helo"));

        let changes = session.get_changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].span(), ChangeSpan::Insertion { start: 0, end: 5 });
        assert_eq!(changes[1].span(), ChangeSpan::Insertion { start: 3, end: 4 });
    }

    #[test]
    fn test_remote_and_undo_redo_are_not_recorded() {
        let session = session();

        session.notify(Mutation::local(Delta::new().insert("abc"), ""));
        session.notify(Mutation::remote(Delta::new().insert("xy")));
        session.notify(Mutation::undo_redo(Delta::new().retain(2).delete(3)));

        assert_eq!(session.change_count(), 0);
    }

    #[test]
    fn test_disabled_session_still_adjusts() {
        let session = session();
        session.notify(Mutation::local(Delta::new().insert("abc"), ""));

        session.disable();
        session.notify(Mutation::local(Delta::new().insert("12"), "abc"));
        session.enable();

        assert_eq!(spans(&session), vec![ChangeSpan::Insertion { start: 2, end: 5 }]);
    }

    #[test]
    fn test_remove_change_and_clear_all() {
        let session = session();
        session.notify(Mutation::local(Delta::new().insert("abc"), ""));
        session.notify(Mutation::local(Delta::new().delete(1), "abc"));

        let id = session.get_changes()[0].id();
        assert!(session.remove_change(id).is_some());
        assert!(session.remove_change(id).is_none());
        assert_eq!(session.change_count(), 1);

        session.clear_all();
        assert!(session.get_changes().is_empty());
        session.clear_all();
        assert!(session.get_changes().is_empty());
    }

    #[test]
    fn test_listeners_receive_snapshots() {
        let session = session();
        let received = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&received);
        let id = session.subscribe(move |changes| sink.borrow_mut().push(changes.len()));

        session.notify(Mutation::local(Delta::new().insert("abc"), ""));
        session.notify(Mutation::remote(Delta::new().insert("x")));
        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.notify(Mutation::local(Delta::new().insert("y"), "xabc"));

        assert_eq!(*received.borrow(), vec![1, 1]);
    }

    #[test]
    fn test_listener_echo_is_dropped_and_reentrant_mutation_queued() {
        let session = Rc::new(session());
        let calls = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&session);
        let counter = Rc::clone(&calls);
        session.subscribe(move |_| {
            counter.set(counter.get() + 1);
            let Some(session) = weak.upgrade() else {
                return;
            };

            assert_eq!(session.bridge_state(), BridgeState::Adjusting);
            assert_eq!(
                session.notify(Mutation::decoration(Delta::new().insert("~"))),
                Dispatch::DroppedEcho
            );

            if counter.get() == 1 {
                assert_eq!(
                    session.notify(Mutation::remote(Delta::new().insert(">"))),
                    Dispatch::Queued
                );
            }
        });

        let result = session.notify(Mutation::local(Delta::new().insert("abc"), ""));

        assert_eq!(result, Dispatch::Processed(2));
        assert_eq!(calls.get(), 2);
        assert_eq!(session.bridge_state(), BridgeState::Idle);
        assert_eq!(spans(&session), vec![ChangeSpan::Insertion { start: 1, end: 4 }]);
    }

    #[test]
    fn test_empty_author_is_rejected() {
        assert_eq!(
            TrackChanges::new(TrackingConfig::new("")).unwrap_err(),
            ConfigError::EmptyAuthor
        );
    }
}
