//! Timer bookkeeping for one build of the background.
//!
//! The set owns handles whose `Drop` cancels the underlying timer. Clearing
//! it cancels every pending timer of the build at once.

use std::collections::VecDeque;

/// A one-shot timer handle that can report whether it already ran.
pub trait TimerHandle {
    fn has_fired(&self) -> bool;
}

/// First-spawn timeouts, respawn intervals and circle-removal timeouts of a
/// single build. `T` is the one-shot handle, `I` the repeating one.
pub struct BuildTimers<T, I> {
    first_spawns: Vec<T>,
    respawns: Vec<I>,
    // Removal timers share one delay, so they fire in the order they were
    // tracked and fired ones collect at the front.
    removals: VecDeque<T>,
}

impl<T, I> Default for BuildTimers<T, I> {
    fn default() -> Self {
        Self {
            first_spawns: Vec::new(),
            respawns: Vec::new(),
            removals: VecDeque::new(),
        }
    }
}

impl<T: TimerHandle, I> BuildTimers<T, I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one descriptor's first spawn and its respawn interval.
    pub fn schedule(&mut self, first: T, every: I) {
        self.first_spawns.push(first);
        self.respawns.push(every);
    }

    /// Keep `removal` alive, dropping removal handles that already fired.
    pub fn track_removal(&mut self, removal: T) {
        while self.removals.front().is_some_and(T::has_fired) {
            self.removals.pop_front();
        }
        self.removals.push_back(removal);
    }

    /// Drop every handle; unfired timers are cancelled by their `Drop`.
    pub fn cancel(&mut self) {
        self.first_spawns.clear();
        self.respawns.clear();
        self.removals.clear();
    }

    #[inline]
    pub fn scheduled(&self) -> usize {
        self.respawns.len()
    }

    #[inline]
    pub fn tracked_removals(&self) -> usize {
        self.removals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_spawns.is_empty() && self.respawns.is_empty() && self.removals.is_empty()
    }
}
