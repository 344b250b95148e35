//! Expose the `track_changes` crate's functionality to WebAssembly.
//!
//! Deltas cross the boundary as JSON in the document engine's shape, e.g.
//! `[{"retain": 4}, {"delete": 3}]`, and snapshots are returned as JSON
//! arrays of tracked changes.
use std::str::FromStr;

use uuid::Uuid;
use wasm_bindgen::prelude::*;

use crate::{ChangeId, Delta, DeletionDirection, Mutation, TrackChanges, TrackingConfig};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::TrackChanges`.
#[wasm_bindgen(js_name = TrackChanges)]
#[derive(Debug)]
pub struct TrackChangesHandle {
    inner: TrackChanges,
}

#[wasm_bindgen(js_class = TrackChanges)]
impl TrackChangesHandle {
    /// # Errors
    ///
    /// If `author` is empty.
    #[wasm_bindgen(constructor)]
    pub fn new(author: &str, enabled: bool) -> Result<TrackChangesHandle, JsError> {
        set_panic_hook();

        Ok(Self {
            inner: TrackChanges::new(TrackingConfig::new(author).enabled(enabled))?,
        })
    }

    pub fn enable(&self) { self.inner.enable(); }

    pub fn disable(&self) { self.inner.disable(); }

    #[wasm_bindgen(js_name = isEnabled)]
    #[must_use]
    pub fn is_enabled(&self) -> bool { self.inner.is_enabled() }

    #[wasm_bindgen(js_name = clearAll)]
    pub fn clear_all(&self) { self.inner.clear_all(); }

    /// # Errors
    ///
    /// If serialising the snapshot fails which should not happen.
    #[wasm_bindgen(js_name = getChanges)]
    pub fn get_changes(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.get_changes())?)
    }

    /// # Errors
    ///
    /// If `id` is not a valid change id.
    #[wasm_bindgen(js_name = removeChange)]
    pub fn remove_change(&self, id: &str) -> Result<bool, JsError> {
        let id = ChangeId::from(Uuid::from_str(id)?);

        Ok(self.inner.remove_change(id).is_some())
    }

    /// Notify a mutation made by the local user. `before` is the document
    /// text before the mutation and `backward` tells whether it was an
    /// erase towards the start of the document.
    ///
    /// # Errors
    ///
    /// If `delta` is not a valid JSON delta.
    #[wasm_bindgen(js_name = applyLocal)]
    pub fn apply_local(
        &self,
        delta: &str,
        before: &str,
        backward: Option<bool>,
    ) -> Result<(), JsError> {
        let mut mutation = Mutation::local(parse_delta(delta)?, before);

        if let Some(backward) = backward {
            mutation = mutation.with_direction(if backward {
                DeletionDirection::Backward
            } else {
                DeletionDirection::Forward
            });
        }

        self.inner.notify(mutation);
        Ok(())
    }

    /// # Errors
    ///
    /// If `delta` is not a valid JSON delta.
    #[wasm_bindgen(js_name = applyRemote)]
    pub fn apply_remote(&self, delta: &str) -> Result<(), JsError> {
        self.inner.notify(Mutation::remote(parse_delta(delta)?));
        Ok(())
    }

    /// # Errors
    ///
    /// If `delta` is not a valid JSON delta.
    #[wasm_bindgen(js_name = applyUndoRedo)]
    pub fn apply_undo_redo(&self, delta: &str) -> Result<(), JsError> {
        self.inner.notify(Mutation::undo_redo(parse_delta(delta)?));
        Ok(())
    }
}

fn parse_delta(delta: &str) -> Result<Delta, serde_json::Error> { serde_json::from_str(delta) }

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
