//! Per-window memory of the last layout state.
//!
//! The [`WindowRegistry`] maps a [`WindowId`] to the [`LayoutState`] the
//! window was last snapped to.  Entries are created lazily on the first
//! hotkey event for a window.  The registry never owns or closes the
//! windows it tracks; stale entries for closed windows are only removed
//! by [`retain_live`](WindowRegistry::retain_live) or
//! [`forget`](WindowRegistry::forget).
//!
//! The registry has no internal locking.  It is owned by the
//! [`SnapController`](crate::controller::SnapController), which processes
//! one command at a time.

use crate::command::WindowId;
use crate::layout::LayoutState;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    states: HashMap<WindowId, LayoutState>,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `id`, recording the window as seen.
    ///
    /// Unseen windows start out [`Maximized`](LayoutState::Maximized).
    pub fn get_or_init(&mut self, id: &WindowId) -> LayoutState {
        *self.states.entry(id.clone()).or_default()
    }

    /// Look up `id` without recording it.
    pub fn get(&self, id: &WindowId) -> Option<LayoutState> {
        self.states.get(id).copied()
    }

    /// Overwrite the state of `id`.
    pub fn set(&mut self, id: &WindowId, state: LayoutState) {
        self.states.insert(id.clone(), state);
    }

    /// Drop the entry for `id`.  Returns the state it had, if any.
    pub fn forget(&mut self, id: &WindowId) -> Option<LayoutState> {
        self.states.remove(id)
    }

    /// Keep only entries whose window is in `live`.
    ///
    /// Returns the number of evicted entries.
    pub fn retain_live<'a>(&mut self, live: impl IntoIterator<Item = &'a WindowId>) -> usize {
        let live: HashSet<&WindowId> = live.into_iter().collect();
        let before = self.states.len();
        self.states.retain(|id, _| live.contains(id));
        before - self.states.len()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
