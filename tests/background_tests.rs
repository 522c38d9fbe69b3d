// Host-side tests for background circle layout.
// The main crate is wasm-only, so these exercise the pure core crate.

use enhance_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn placement_size_and_left_offset_follow_size_class() {
    let mut rng = StdRng::seed_from_u64(7);
    for desc in CIRCLE_CONFIG.iter() {
        let p = place_circle(desc, 900.0, &mut rng);
        let expected = match desc.size {
            CircleSize::Small => 200.0,
            CircleSize::Medium => 300.0,
            CircleSize::Large => 400.0,
        };
        assert_eq!(p.size_px, expected);
        assert_eq!(p.left_px, -(expected + 50.0));
    }
}

#[test]
fn vertical_position_stays_within_offset_band() {
    let mut rng = StdRng::seed_from_u64(42);
    let vh = 1000.0;
    for _ in 0..200 {
        for desc in CIRCLE_CONFIG.iter() {
            let p = place_circle(desc, vh, &mut rng);
            assert!(p.top_px >= desc.y_offset);
            assert!(p.top_px < vh - p.size_px + desc.y_offset);
        }
    }
}

#[test]
fn vertical_position_clamps_to_zero_on_short_viewports() {
    // 100px tall viewport, 400px circle: span is negative.
    assert_eq!(vertical_position(0.99, 100.0, 400.0, 20.0), 0.0);
    assert_eq!(vertical_position(0.0, 100.0, 400.0, 20.0), 20.0);
}

#[test]
fn descriptor_table_matches_schedule() {
    let delays: Vec<i32> = CIRCLE_CONFIG.iter().map(|d| d.delay_ms).collect();
    assert_eq!(
        delays,
        vec![0, 5_000, 2_500, 10_000, 7_500, 12_500, 20_000, 25_000]
    );
    assert_eq!(CIRCLE_CONFIG[0].size, CircleSize::Large);
    assert_eq!(CIRCLE_CONFIG[6].y_offset, 100.0);
    // Every first spawn happens before its first repeat.
    assert!(CIRCLE_CONFIG
        .iter()
        .all(|d| d.delay_ms < CIRCLE_RESPAWN_INTERVAL_MS));
}

#[test]
fn circle_markup_carries_size_and_position() {
    let p = CirclePlacement {
        size_px: 300.0,
        top_px: 125.5,
        left_px: offscreen_left(300.0),
    };
    let css = circle_css(&p);
    assert!(css.contains("top: 125.5px"));
    assert!(css.contains("left: -350px"));
    assert!(css.contains("width: 300px"));
    assert!(css.contains("flow-movement 40s linear"));
    assert_eq!(circle_class(CircleSize::Medium), "flow-circle medium");
}

#[test]
fn container_is_fixed_and_click_through() {
    let css = container_css();
    assert!(css.contains("position: fixed"));
    assert!(css.contains("pointer-events: none"));
    assert!(css.contains("opacity: 0.12"));
}
