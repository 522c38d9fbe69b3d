//! Drawer state bridging.
//!
//! Three parties hold a view of whether a drawer is open: the theme's native
//! checkbox, our proxy button, and the persisted flag. [`DrawerBridge`] owns
//! the persisted half and hands back the proxy label the DOM layer needs to bring
//! the other two in line, so a click, a native change event and the initial
//! load all go through [`DrawerBridge::apply_state`].

use log::warn;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Drawer {
    Navigation,
    Contents,
}

pub const GLYPH_OPEN: &str = "«";

impl Drawer {
    pub const ALL: [Drawer; 2] = [Drawer::Navigation, Drawer::Contents];

    #[inline]
    fn index(self) -> usize {
        match self {
            Drawer::Navigation => 0,
            Drawer::Contents => 1,
        }
    }

    pub fn storage_key(self) -> &'static str {
        match self {
            Drawer::Navigation => "sidebar-nav-open",
            Drawer::Contents => "sidebar-toc-open",
        }
    }

    pub fn drawer_selector(self) -> &'static str {
        match self {
            Drawer::Navigation => ".sidebar-drawer",
            Drawer::Contents => ".toc-drawer",
        }
    }

    pub fn control_selector(self) -> &'static str {
        match self {
            Drawer::Navigation => "#__navigation",
            Drawer::Contents => "#__toc",
        }
    }

    pub fn overlay_selector(self) -> &'static str {
        match self {
            Drawer::Navigation => ".sidebar-overlay",
            Drawer::Contents => ".toc-overlay",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            Drawer::Navigation => "sidebar-toggle-left",
            Drawer::Contents => "sidebar-toggle-right",
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            Drawer::Navigation => "Toggle Navigation Sidebar",
            Drawer::Contents => "Toggle Table of Contents",
        }
    }

    fn closed_glyph(self) -> &'static str {
        match self {
            Drawer::Navigation => "☰",
            Drawer::Contents => "»",
        }
    }

    /// Transform that slides the drawer off its own edge of the viewport.
    fn hidden_transform(self) -> &'static str {
        match self {
            Drawer::Navigation => "translateX(-100%)",
            Drawer::Contents => "translateX(100%)",
        }
    }

    fn body_class(self, open: bool) -> &'static str {
        match (self, open) {
            (Drawer::Navigation, true) => "sidebar-nav-open",
            (Drawer::Navigation, false) => "sidebar-nav-closed",
            (Drawer::Contents, true) => "sidebar-toc-open",
            (Drawer::Contents, false) => "sidebar-toc-closed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProxyLabel {
    pub glyph: &'static str,
    pub title: &'static str,
}

impl ProxyLabel {
    pub fn for_state(drawer: Drawer, open: bool) -> Self {
        let title = match (drawer, open) {
            (Drawer::Navigation, true) => "Hide Navigation Sidebar",
            (Drawer::Navigation, false) => "Show Navigation Sidebar",
            (Drawer::Contents, true) => "Hide Table of Contents",
            (Drawer::Contents, false) => "Show Table of Contents",
        };
        let glyph = if open {
            GLYPH_OPEN
        } else {
            drawer.closed_glyph()
        };
        Self { glyph, title }
    }
}

/// Inline style values for a drawer and its overlay. `display` is only
/// forced when opening; closing leaves the theme's display alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawerPresentation {
    pub display: Option<&'static str>,
    pub transform: &'static str,
    pub opacity: &'static str,
    pub visibility: &'static str,
    pub overlay_display: &'static str,
    pub overlay_opacity: &'static str,
}

impl DrawerPresentation {
    pub fn for_state(drawer: Drawer, open: bool) -> Self {
        if open {
            Self {
                display: Some("block"),
                transform: "translateX(0)",
                opacity: "1",
                visibility: "visible",
                overlay_display: "block",
                overlay_opacity: "1",
            }
        } else {
            Self {
                display: None,
                transform: drawer.hidden_transform(),
                opacity: "0",
                visibility: "hidden",
                overlay_display: "none",
                overlay_opacity: "0",
            }
        }
    }
}

/// Body marker classes and whether each should be present.
pub fn body_classes(nav_open: bool, toc_open: bool) -> [(&'static str, bool); 4] {
    [
        (Drawer::Navigation.body_class(true), nav_open),
        (Drawer::Navigation.body_class(false), !nav_open),
        (Drawer::Contents.body_class(true), toc_open),
        (Drawer::Contents.body_class(false), !toc_open),
    ]
}

#[inline]
pub fn encode_flag(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

#[inline]
pub fn decode_flag(value: &str) -> bool {
    value == "true"
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String key/value persistence for the open-state flags.
pub trait FlagStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store; used when the browser refuses `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persisted half of the bridge. The native checkbox is the only record of
/// whether a drawer is open; the bridge writes that state through to storage
/// and reports the proxy label to show.
pub struct DrawerBridge<S: FlagStore> {
    store: S,
}

impl<S: FlagStore> DrawerBridge<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persisted flag if present, otherwise closed with the default written
    /// back. The read happens before any write.
    pub fn resolve_initial(&mut self, drawer: Drawer) -> bool {
        let key = drawer.storage_key();
        let saved = match self.store.load(key) {
            Ok(v) => v,
            Err(e) => {
                warn!("[sidebar] {}", e);
                None
            }
        };
        match saved {
            Some(v) => decode_flag(&v),
            None => {
                self.persist(drawer, false);
                false
            }
        }
    }

    pub fn apply_state(&mut self, drawer: Drawer, open: bool) -> ProxyLabel {
        self.persist(drawer, open);
        ProxyLabel::for_state(drawer, open)
    }

    fn persist(&mut self, drawer: Drawer, open: bool) {
        if let Err(e) = self.store.save(drawer.storage_key(), encode_flag(open)) {
            warn!("[sidebar] {}", e);
        }
    }
}

/// What the page currently shows for one drawer: the native checkbox state
/// (`None` when the theme has no checkbox) and whether the drawer panel
/// exists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerView {
    pub checked: Option<bool>,
    pub has_panel: bool,
}

/// Styles and body classes derived from both drawers' views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualSync {
    presentations: [Option<DrawerPresentation>; 2],
    pub body_classes: [(&'static str, bool); 4],
}

impl VisualSync {
    /// A panel is restyled only when its checkbox exists. Body classes follow
    /// the checkboxes alone, so a checkbox without a panel still counts.
    pub fn plan(nav: DrawerView, toc: DrawerView) -> Self {
        let presentation = |drawer: Drawer, view: DrawerView| match view.checked {
            Some(open) if view.has_panel => Some(DrawerPresentation::for_state(drawer, open)),
            _ => None,
        };
        Self {
            presentations: [
                presentation(Drawer::Navigation, nav),
                presentation(Drawer::Contents, toc),
            ],
            body_classes: body_classes(
                nav.checked.unwrap_or(false),
                toc.checked.unwrap_or(false),
            ),
        }
    }

    #[inline]
    pub fn presentation(&self, drawer: Drawer) -> Option<DrawerPresentation> {
        self.presentations[drawer.index()]
    }
}
