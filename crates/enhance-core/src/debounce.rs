//! Trailing-edge debounce expressed as generations.
//!
//! Every trigger hands out a new generation and the caller arms a timer
//! carrying it. When a timer fires it asks [`Debounce::fire`] whether its
//! generation is still the latest; only the timer armed by the last trigger
//! of a burst is honoured, so a burst produces exactly one action.

#[derive(Clone, Debug)]
pub struct Debounce {
    delay_ms: i32,
    generation: u64,
    pending: bool,
}

impl Debounce {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: false,
        }
    }

    #[inline]
    pub fn delay_ms(&self) -> i32 {
        self.delay_ms
    }

    /// Record a trigger and return the generation the new timer must carry.
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        self.generation
    }

    /// A timer armed with `generation` elapsed. Returns true if the action
    /// should run now.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.pending && generation == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Drop any pending trigger; outstanding timers become no-ops.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = false;
    }
}
