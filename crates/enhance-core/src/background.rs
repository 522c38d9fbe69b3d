use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircleSize {
    Small,
    Medium,
    Large,
}

impl CircleSize {
    pub fn px(self) -> f64 {
        match self {
            CircleSize::Small => CIRCLE_SMALL_PX,
            CircleSize::Medium => CIRCLE_MEDIUM_PX,
            CircleSize::Large => CIRCLE_LARGE_PX,
        }
    }

    /// Class name appended to `flow-circle`.
    pub fn class_name(self) -> &'static str {
        match self {
            CircleSize::Small => "small",
            CircleSize::Medium => "medium",
            CircleSize::Large => "large",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleDescriptor {
    pub size: CircleSize,
    pub delay_ms: i32,
    pub y_offset: f64,
}

const fn desc(size: CircleSize, delay_ms: i32, y_offset: f64) -> CircleDescriptor {
    CircleDescriptor {
        size,
        delay_ms,
        y_offset,
    }
}

pub const CIRCLE_CONFIG: [CircleDescriptor; 8] = [
    desc(CircleSize::Large, 0, 20.0),
    desc(CircleSize::Medium, 5_000, 60.0),
    desc(CircleSize::Small, 2_500, 40.0),
    desc(CircleSize::Large, 10_000, 80.0),
    desc(CircleSize::Medium, 7_500, 30.0),
    desc(CircleSize::Small, 12_500, 70.0),
    desc(CircleSize::Medium, 20_000, 100.0),
    desc(CircleSize::Small, 25_000, 40.0),
];

/// Where a freshly spawned circle starts, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CirclePlacement {
    pub size_px: f64,
    pub top_px: f64,
    pub left_px: f64,
}

/// Starting x for a circle of `size_px`: fully off-screen to the left.
#[inline]
pub fn offscreen_left(size_px: f64) -> f64 {
    -(size_px + CIRCLE_OFFSCREEN_BUFFER_PX)
}

/// Vertical position from a unit random sample in `[0, 1)`.
///
/// When the viewport is shorter than the circle the span goes negative; the
/// clamp keeps the circle's top edge on screen.
#[inline]
pub fn vertical_position(unit: f64, viewport_height: f64, size_px: f64, y_offset: f64) -> f64 {
    (unit * (viewport_height - size_px) + y_offset).max(0.0)
}

pub fn place_circle<R: Rng>(
    desc: &CircleDescriptor,
    viewport_height: f64,
    rng: &mut R,
) -> CirclePlacement {
    let size_px = desc.size.px();
    let unit: f64 = rng.gen();
    CirclePlacement {
        size_px,
        top_px: vertical_position(unit, viewport_height, size_px, desc.y_offset),
        left_px: offscreen_left(size_px),
    }
}

/// Circle class attribute, e.g. `flow-circle large`.
pub fn circle_class(size: CircleSize) -> String {
    format!("flow-circle {}", size.class_name())
}

pub fn container_css() -> String {
    format!(
        "position: fixed !important; top: 0 !important; left: 0 !important; \
         width: 100vw !important; height: 100vh !important; \
         pointer-events: none !important; z-index: 0 !important; \
         overflow: hidden !important; background: rgba(255,0,0,0.1) !important; \
         opacity: {} !important;",
        BACKGROUND_OPACITY
    )
}

pub fn circle_css(p: &CirclePlacement) -> String {
    format!(
        "position: absolute !important; top: {top}px !important; left: {left}px !important; \
         animation: flow-movement {secs}s linear infinite !important; \
         animation-delay: 0s !important; z-index: -5 !important; \
         width: {size}px !important; height: {size}px !important; \
         background: var(--main-color, rgb(199,0,11)) !important; border-radius: 50% !important; \
         opacity: 0.9 !important;",
        top = p.top_px,
        left = p.left_px,
        size = p.size_px,
        secs = CIRCLE_ANIMATION_MS / 1000,
    )
}
