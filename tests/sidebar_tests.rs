// Host-side tests for the drawer bridge: persisted flags, proxy labels,
// drawer presentation and body marker classes.

use enhance_core::styles::sidebar_stylesheet;
use enhance_core::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Store whose reads and writes always fail.
struct BrokenStore;

impl FlagStore for BrokenStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Read {
            key: key.to_string(),
            reason: "denied".to_string(),
        })
    }
    fn save(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write {
            key: key.to_string(),
            reason: "quota".to_string(),
        })
    }
}

/// Store whose entries stay visible to the test after the bridge takes it.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<HashMap<String, String>>>);

impl SharedStore {
    fn seeded(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (k, v) in entries {
            store.0.borrow_mut().insert(k.to_string(), v.to_string());
        }
        store
    }

    fn flag(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }
}

impl FlagStore for SharedStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.flag(key))
    }
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[test]
fn first_visit_defaults_closed_and_persists_default() {
    let store = SharedStore::default();
    let mut bridge = DrawerBridge::new(store.clone());
    for drawer in Drawer::ALL {
        assert!(!bridge.resolve_initial(drawer));
    }
    assert_eq!(store.flag("sidebar-nav-open").as_deref(), Some("false"));
    assert_eq!(store.flag("sidebar-toc-open").as_deref(), Some("false"));
}

#[test]
fn persisted_preference_is_adopted_not_overwritten() {
    let store = SharedStore::seeded(&[("sidebar-nav-open", "true"), ("sidebar-toc-open", "false")]);
    let mut bridge = DrawerBridge::new(store.clone());
    assert!(bridge.resolve_initial(Drawer::Navigation));
    assert!(!bridge.resolve_initial(Drawer::Contents));
    assert_eq!(store.flag("sidebar-nav-open").as_deref(), Some("true"));
}

#[test]
fn unexpected_flag_value_reads_as_closed() {
    let store = SharedStore::seeded(&[("sidebar-nav-open", "yes")]);
    let mut bridge = DrawerBridge::new(store.clone());
    assert!(!bridge.resolve_initial(Drawer::Navigation));
    assert_eq!(store.flag("sidebar-nav-open").as_deref(), Some("yes"));
}

#[test]
fn memory_store_keeps_written_flags() {
    let mut bridge = DrawerBridge::new(MemoryStore::new());
    bridge.apply_state(Drawer::Contents, true);
    assert!(bridge.resolve_initial(Drawer::Contents));
}

#[test]
fn apply_state_persists_and_labels() {
    let store = SharedStore::default();
    let mut bridge = DrawerBridge::new(store.clone());
    bridge.resolve_initial(Drawer::Navigation);

    let label = bridge.apply_state(Drawer::Navigation, true);
    assert_eq!(store.flag("sidebar-nav-open").as_deref(), Some("true"));
    assert_eq!(label.glyph, "«");
    assert_eq!(label.title, "Hide Navigation Sidebar");

    let label = bridge.apply_state(Drawer::Navigation, false);
    assert_eq!(store.flag("sidebar-nav-open").as_deref(), Some("false"));
    assert_eq!(label.glyph, "☰");
    assert_eq!(label.title, "Show Navigation Sidebar");
}

#[test]
fn restored_open_drawer_closes_on_first_click() {
    // The click handler flips the native checkbox, which was set from the
    // restored flag, so the first click after a restore must close.
    let store = SharedStore::seeded(&[("sidebar-nav-open", "true")]);
    let mut bridge = DrawerBridge::new(store.clone());
    let checked = bridge.resolve_initial(Drawer::Navigation);
    assert!(checked);
    bridge.apply_state(Drawer::Navigation, checked);

    let label = bridge.apply_state(Drawer::Navigation, !checked);
    assert_eq!(store.flag("sidebar-nav-open").as_deref(), Some("false"));
    assert_eq!(label, ProxyLabel::for_state(Drawer::Navigation, false));
}

#[test]
fn visual_sync_follows_checkboxes() {
    let nav = DrawerView {
        checked: Some(true),
        has_panel: true,
    };
    let toc = DrawerView {
        checked: Some(false),
        has_panel: true,
    };
    let plan = VisualSync::plan(nav, toc);
    assert_eq!(
        plan.presentation(Drawer::Navigation),
        Some(DrawerPresentation::for_state(Drawer::Navigation, true))
    );
    assert_eq!(
        plan.presentation(Drawer::Contents),
        Some(DrawerPresentation::for_state(Drawer::Contents, false))
    );
    assert_eq!(
        plan.body_classes,
        [
            ("sidebar-nav-open", true),
            ("sidebar-nav-closed", false),
            ("sidebar-toc-open", false),
            ("sidebar-toc-closed", true),
        ]
    );
}

#[test]
fn toc_checkbox_without_drawer_still_sets_body_classes() {
    let nav = DrawerView {
        checked: Some(false),
        has_panel: true,
    };
    let toc = DrawerView {
        checked: Some(true),
        has_panel: false,
    };
    let plan = VisualSync::plan(nav, toc);
    assert_eq!(plan.presentation(Drawer::Contents), None);
    assert!(plan.body_classes.contains(&("sidebar-toc-open", true)));
    assert!(plan.body_classes.contains(&("sidebar-toc-closed", false)));
}

#[test]
fn drawer_without_checkbox_is_not_restyled() {
    let nav = DrawerView {
        checked: None,
        has_panel: true,
    };
    let plan = VisualSync::plan(nav, DrawerView::default());
    assert_eq!(plan.presentation(Drawer::Navigation), None);
    assert_eq!(plan.body_classes, body_classes(false, false));
}

#[test]
fn body_classes_track_both_drawers() {
    assert_eq!(
        body_classes(false, true),
        [
            ("sidebar-nav-open", false),
            ("sidebar-nav-closed", true),
            ("sidebar-toc-open", true),
            ("sidebar-toc-closed", false),
        ]
    );
}

#[test]
fn body_classes_are_mutually_exclusive_per_drawer() {
    for nav in [false, true] {
        for toc in [false, true] {
            let c = body_classes(nav, toc);
            assert_ne!(c[0].1, c[1].1);
            assert_ne!(c[2].1, c[3].1);
        }
    }
}

#[test]
fn contents_drawer_slides_out_to_the_right() {
    let p = DrawerPresentation::for_state(Drawer::Contents, false);
    assert_eq!(p.transform, "translateX(100%)");
    assert_eq!(p.display, None);
    assert_eq!(p.overlay_display, "none");
    let label = ProxyLabel::for_state(Drawer::Contents, false);
    assert_eq!(label.glyph, "»");
    assert_eq!(label.title, "Show Table of Contents");
}

#[test]
fn open_presentation_forces_display() {
    let p = DrawerPresentation::for_state(Drawer::Navigation, true);
    assert_eq!(p.display, Some("block"));
    assert_eq!(p.overlay_display, "block");
    assert_eq!(p.overlay_opacity, "1");
}

#[test]
fn failing_store_degrades_to_closed() {
    let mut bridge = DrawerBridge::new(BrokenStore);
    assert!(!bridge.resolve_initial(Drawer::Navigation));
    let label = bridge.apply_state(Drawer::Navigation, true);
    assert_eq!(label.glyph, "«");
}

#[test]
fn flags_round_trip_as_strings() {
    assert_eq!(encode_flag(true), "true");
    assert_eq!(encode_flag(false), "false");
    assert!(decode_flag("true"));
    assert!(!decode_flag("false"));
}

#[test]
fn stylesheet_places_buttons_and_hides_native_icons() {
    let css = sidebar_stylesheet();
    assert!(css.contains(".sidebar-toggle-left { left: 15px !important; }"));
    assert!(css.contains(".sidebar-toggle-right { right: 15px !important; }"));
    assert!(css.contains(".nav-overlay-icon"));
    assert!(css.contains("@media (max-width: 768px)"));
    assert!(css.contains("@media (max-width: 480px)"));
    assert!(css.contains("var(--main-color, rgb(199,0,11))"));
    assert!(css.contains("var(--tech-black, #0d1117)"));
    assert!(!css.contains("{{"));
}
