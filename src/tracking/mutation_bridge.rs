use core::cell::{Cell, RefCell};
use std::collections::VecDeque;

use log::{debug, warn};

use crate::types::{mutation::Mutation, origin::Origin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BridgeState {
    #[default]
    Idle,

    /// A mutation is being processed; new notifications are queued.
    Adjusting,
}

/// What happened to a mutation handed to `MutationBridge::dispatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The mutation and `usize - 1` others queued meanwhile were processed.
    Processed(usize),

    /// Another mutation is being processed, this one runs right after it.
    Queued,

    /// A decoration update caused by processing another mutation.
    DroppedEcho,
}

/// Serialises document mutation notifications so that each is processed
/// exactly once, in delivery order, and never recursively.
#[derive(Debug, Default)]
pub struct MutationBridge {
    state: Cell<BridgeState>,
    pending: RefCell<VecDeque<Mutation>>,
}

impl MutationBridge {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn state(&self) -> BridgeState { self.state.get() }

    /// Number of mutations waiting for the current one to finish.
    #[must_use]
    pub fn pending(&self) -> usize { self.pending.borrow().len() }

    /// Runs `process` for `mutation` if the bridge is idle, then for every
    /// mutation dispatched while it was running. If the bridge is already
    /// processing a mutation, `mutation` is queued instead, unless it's a
    /// decoration update which is dropped.
    pub fn dispatch(&self, mutation: Mutation, mut process: impl FnMut(&Mutation)) -> Dispatch {
        if self.state.get() == BridgeState::Adjusting {
            if mutation.origin == Origin::Decoration {
                debug!("Dropping decoration echo: {}", mutation.delta);
                return Dispatch::DroppedEcho;
            }

            debug!("Queueing {} mutation: {}", mutation.origin, mutation.delta);
            self.pending.borrow_mut().push_back(mutation);
            return Dispatch::Queued;
        }

        let _adjusting = AdjustingGuard::enter(self);

        let mut processed = 0;
        let mut next = Some(mutation);

        while let Some(mutation) = next {
            process(&mutation);
            processed += 1;

            next = self.pending.borrow_mut().pop_front();
        }

        Dispatch::Processed(processed)
    }
}

/// Puts the bridge back to `Idle` however processing ends. A panic discards
/// the queued mutations.
struct AdjustingGuard<'a> {
    bridge: &'a MutationBridge,
}

impl<'a> AdjustingGuard<'a> {
    fn enter(bridge: &'a MutationBridge) -> Self {
        bridge.state.set(BridgeState::Adjusting);
        Self { bridge }
    }
}

impl Drop for AdjustingGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            let mut pending = self.bridge.pending.borrow_mut();
            warn!(
                "Mutation processing panicked, resetting the bridge and discarding {} queued \
                 mutations",
                pending.len()
            );
            pending.clear();
        }
        self.bridge.state.set(BridgeState::Idle);
    }
}
