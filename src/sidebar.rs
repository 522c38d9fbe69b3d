use crate::dom;
use crate::storage::BrowserStore;
use enhance_core::styles::{sidebar_stylesheet, SIDEBAR_STYLE_ID};
use enhance_core::{Drawer, DrawerBridge, DrawerView, ProxyLabel, VisualSync};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const MAIN_CONTENT_SELECTOR: &str = "#furo-main-content";

/// DOM anchors for one drawer that has a proxy button.
struct DrawerAnchors {
    drawer: Drawer,
    panel: web::HtmlElement,
    button: web::HtmlElement,
}

struct Sidebar {
    document: web::Document,
    body: web::HtmlElement,
    bridge: DrawerBridge<BrowserStore>,
    anchors: Vec<DrawerAnchors>,
    // Looked up per drawer whether or not its panel exists.
    controls: Vec<(Drawer, web::HtmlInputElement)>,
}

impl Sidebar {
    fn anchors(&self, drawer: Drawer) -> Option<&DrawerAnchors> {
        self.anchors.iter().find(|a| a.drawer == drawer)
    }

    fn control(&self, drawer: Drawer) -> Option<&web::HtmlInputElement> {
        self.controls
            .iter()
            .find(|(d, _)| *d == drawer)
            .map(|(_, c)| c)
    }

    /// A drawer is bridged when it has both a proxy button and a checkbox.
    fn is_bridged(&self, drawer: Drawer) -> bool {
        self.anchors(drawer).is_some() && self.control(drawer).is_some()
    }

    fn view(&self, drawer: Drawer) -> DrawerView {
        DrawerView {
            checked: self.control(drawer).map(|c| c.checked()),
            has_panel: self.anchors(drawer).is_some(),
        }
    }

    /// Bring native control, proxy label and persisted flag in line with
    /// `open`. Does not touch drawer visuals.
    fn set_state(&mut self, drawer: Drawer, open: bool) {
        let label = self.bridge.apply_state(drawer, open);
        if let Some(c) = self.control(drawer) {
            c.set_checked(open);
        }
        if let Some(a) = self.anchors(drawer) {
            set_label(&a.button, label);
        }
        log::debug!("[sidebar] {:?} open={}", drawer, open);
    }

    fn apply_state(&mut self, drawer: Drawer, open: bool) {
        self.set_state(drawer, open);
        self.sync_visuals();
    }

    /// Idempotent: derive drawer styles and body classes from the native
    /// controls.
    fn sync_visuals(&self) {
        let plan = VisualSync::plan(
            self.view(Drawer::Navigation),
            self.view(Drawer::Contents),
        );
        for a in &self.anchors {
            let Some(p) = plan.presentation(a.drawer) else {
                continue;
            };
            if let Some(display) = p.display {
                dom::set_style(&a.panel, "display", display);
            }
            dom::set_style(&a.panel, "transform", p.transform);
            dom::set_style(&a.panel, "opacity", p.opacity);
            dom::set_style(&a.panel, "visibility", p.visibility);
            if let Some(overlay) = dom::query_html(&self.document, a.drawer.overlay_selector()) {
                dom::set_style(&overlay, "display", p.overlay_display);
                dom::set_style(&overlay, "opacity", p.overlay_opacity);
            }
        }

        let list = self.body.class_list();
        for (name, on) in plan.body_classes {
            _ = list.toggle_with_force(name, on);
        }
    }
}

type Shared = Rc<RefCell<Sidebar>>;

fn set_label(button: &web::HtmlElement, label: ProxyLabel) {
    button.set_inner_text(label.glyph);
    button.set_title(label.title);
}

fn create_button(
    document: &web::Document,
    body: &web::HtmlElement,
    drawer: Drawer,
) -> anyhow::Result<web::HtmlElement> {
    let button = dom::create_html(document, "button")?;
    button.set_class_name(drawer.button_class());
    button.set_inner_text(ProxyLabel::for_state(drawer, false).glyph);
    button.set_title(drawer.aria_label());
    button
        .set_attribute("aria-label", drawer.aria_label())
        .map_err(dom::js_err)?;
    body.append_child(&button).map_err(dom::js_err)?;
    Ok(button)
}

fn native_control(document: &web::Document, drawer: Drawer) -> Option<web::HtmlInputElement> {
    dom::query(document, drawer.control_selector())
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let nav_panel = dom::query_html(document, Drawer::Navigation.drawer_selector());
    let main_content = dom::query(document, MAIN_CONTENT_SELECTOR);
    let (Some(nav_panel), Some(_)) = (nav_panel, main_content) else {
        log::warn!("[sidebar] required sidebar elements not found");
        return Ok(());
    };
    let body = dom::body(document)?;

    let mut anchors = vec![DrawerAnchors {
        drawer: Drawer::Navigation,
        panel: nav_panel,
        button: create_button(document, &body, Drawer::Navigation)?,
    }];
    if let Some(toc_panel) = dom::query_html(document, Drawer::Contents.drawer_selector()) {
        anchors.push(DrawerAnchors {
            drawer: Drawer::Contents,
            panel: toc_panel,
            button: create_button(document, &body, Drawer::Contents)?,
        });
    }

    let sidebar = Rc::new(RefCell::new(Sidebar {
        document: document.clone(),
        body,
        bridge: DrawerBridge::new(BrowserStore::open()),
        anchors,
        controls: Drawer::ALL
            .into_iter()
            .filter_map(|d| native_control(document, d).map(|c| (d, c)))
            .collect(),
    }));

    restore(&sidebar);
    wire_buttons(&sidebar);
    wire_native_changes(&sidebar);
    inject_styles(document)?;
    log::info!(
        "[sidebar] bridged {} drawer(s)",
        sidebar.borrow().anchors.len()
    );
    Ok(())
}

/// Persisted state per drawer, then one visual sync for both.
fn restore(sidebar: &Shared) {
    let mut sb = sidebar.borrow_mut();
    for drawer in Drawer::ALL {
        if !sb.is_bridged(drawer) {
            continue;
        }
        let open = sb.bridge.resolve_initial(drawer);
        sb.set_state(drawer, open);
    }
    sb.sync_visuals();
}

fn wire_buttons(sidebar: &Shared) {
    let buttons: Vec<(Drawer, web::HtmlElement)> = sidebar
        .borrow()
        .anchors
        .iter()
        .map(|a| (a.drawer, a.button.clone()))
        .collect();
    for (drawer, button) in buttons {
        let sb = sidebar.clone();
        dom::add_listener(&button, "click", move |_: web::MouseEvent| {
            let mut s = sb.borrow_mut();
            let Some(open) = s.control(drawer).map(|c| c.checked()) else {
                return;
            };
            s.apply_state(drawer, !open);
        });
    }
}

fn wire_native_changes(sidebar: &Shared) {
    let controls: Vec<(Drawer, web::HtmlInputElement)> = {
        let sb = sidebar.borrow();
        sb.controls
            .iter()
            .filter(|(d, _)| sb.is_bridged(*d))
            .cloned()
            .collect()
    };
    for (drawer, control) in controls {
        let sb = sidebar.clone();
        let source = control.clone();
        dom::add_listener(&control, "change", move |_: web::Event| {
            sb.borrow_mut().apply_state(drawer, source.checked());
        });
    }
}

fn inject_styles(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(SIDEBAR_STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    let style = document.create_element("style").map_err(dom::js_err)?;
    style.set_id(SIDEBAR_STYLE_ID);
    style.set_text_content(Some(&sidebar_stylesheet()));
    head.append_child(&style).map_err(dom::js_err)?;
    Ok(())
}
