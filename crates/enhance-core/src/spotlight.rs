use crate::constants::*;
use crate::debounce::Debounce;
use glam::Vec2;

/// Pointer-driven visibility of the spotlight overlay.
///
/// The inactivity timer is a [`Debounce`]: every move re-arms it and only the
/// timer from the latest move can fade the overlay out.
#[derive(Clone, Debug)]
pub struct SpotlightState {
    pointer: Vec2,
    moving: bool,
    opacity: f32,
    idle: Debounce,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub became_visible: bool,
    pub idle_generation: u64,
}

impl Default for SpotlightState {
    fn default() -> Self {
        Self::new()
    }
}

impl SpotlightState {
    pub fn new() -> Self {
        Self {
            pointer: Vec2::ZERO,
            moving: false,
            opacity: 0.0,
            idle: Debounce::new(SPOTLIGHT_IDLE_FADE_MS),
        }
    }

    pub fn pointer_moved(&mut self, pos: Vec2) -> MoveOutcome {
        self.pointer = pos;
        let became_visible = !self.moving;
        if became_visible {
            self.moving = true;
            self.opacity = 1.0;
        }
        MoveOutcome {
            became_visible,
            idle_generation: self.idle.trigger(),
        }
    }

    /// The inactivity timer armed with `generation` elapsed. Returns true if
    /// the overlay was hidden.
    pub fn idle_elapsed(&mut self, generation: u64) -> bool {
        if !self.idle.fire(generation) {
            return false;
        }
        self.opacity = 0.0;
        self.moving = false;
        true
    }

    pub fn pointer_left(&mut self) {
        self.idle.cancel();
        self.opacity = 0.0;
        self.moving = false;
    }

    /// Returns true if the overlay became visible again.
    pub fn pointer_entered(&mut self) -> bool {
        if self.moving {
            self.opacity = 1.0;
        }
        self.moving
    }

    /// Enhanced mode: scale visibility by proximity to an important element.
    pub fn apply_intensity(&mut self, intensity: f32) {
        self.opacity = if self.moving { intensity } else { 0.0 };
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    #[inline]
    pub fn idle_delay_ms(&self) -> i32 {
        self.idle.delay_ms()
    }
}

/// Headings and code blocks get proximity-scaled intensity.
#[inline]
pub fn is_important(tag_name: &str, is_code_block: bool) -> bool {
    is_code_block || tag_name.eq_ignore_ascii_case("H1") || tag_name.eq_ignore_ascii_case("H2")
}

pub fn proximity_intensity(pointer: Vec2, element_center: Vec2, important: bool) -> f32 {
    if !important {
        return 1.0;
    }
    let distance = pointer.distance(element_center);
    let intensity = (1.0 - distance / INTENSITY_MAX_DISTANCE_PX).max(INTENSITY_FLOOR);
    (intensity * INTENSITY_BOOST).min(1.0)
}

pub fn spotlight_css() -> String {
    format!(
        "position: fixed; top: 0; left: 0; width: {size}px; height: {size}px; \
         background: radial-gradient(circle, rgba(255, 255, 255, 0.25) 0%, \
         rgba(255, 255, 255, 0.03) 30%, transparent 70%); \
         border-radius: 50%; pointer-events: none; z-index: {z}; \
         transform: translate(-50%, -50%); filter: blur({blur}px); opacity: 0; \
         transition: opacity 0.3s ease; mix-blend-mode: screen;",
        size = SPOTLIGHT_SIZE_PX,
        z = SPOTLIGHT_Z_INDEX,
        blur = SPOTLIGHT_BLUR_PX,
    )
}
