use crate::dom;
use crate::timers::Timeout;
use enhance_core::line_numbers::CODE_BLOCK_CLASS;
use enhance_core::{is_important, proximity_intensity, spotlight_css, SpotlightState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Spotlight {
    el: web::HtmlElement,
    state: SpotlightState,
    idle_timer: Option<Timeout>,
    enhanced: bool,
}

impl Spotlight {
    fn write_opacity(&self) {
        dom::set_style(&self.el, "opacity", &self.state.opacity().to_string());
    }

    fn write_position(&self) {
        let p = self.state.pointer();
        dom::set_style(&self.el, "left", &format!("{}px", p.x));
        dom::set_style(&self.el, "top", &format!("{}px", p.y));
    }
}

type Shared = Rc<RefCell<Spotlight>>;

pub fn init(document: &web::Document, enhanced: bool) -> anyhow::Result<()> {
    let body = dom::body(document)?;
    let el = dom::create_html(document, "div")?;
    el.set_id("mouse-spotlight");
    el.style().set_css_text(&spotlight_css());
    body.append_child(&el).map_err(dom::js_err)?;

    let spot = Rc::new(RefCell::new(Spotlight {
        el,
        state: SpotlightState::new(),
        idle_timer: None,
        enhanced,
    }));
    start_loop(spot.clone());
    wire_pointer(document, &spot);
    log::info!("[spotlight] ready (enhanced={})", enhanced);
    Ok(())
}

/// Reposition the overlay on every animation frame for the page lifetime.
fn start_loop(spot: Shared) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        spot.borrow().write_position();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn wire_pointer(document: &web::Document, spot: &Shared) {
    let s = spot.clone();
    let doc = document.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let outcome = s.borrow_mut().state.pointer_moved(pos);
        if outcome.became_visible {
            s.borrow().write_opacity();
        }

        let st = s.clone();
        let generation = outcome.idle_generation;
        let delay = s.borrow().state.idle_delay_ms();
        match Timeout::new(delay, move || {
            let hidden = st.borrow_mut().state.idle_elapsed(generation);
            if hidden {
                st.borrow().write_opacity();
            }
        }) {
            Ok(t) => s.borrow_mut().idle_timer = Some(t),
            Err(e) => log::error!("[spotlight] idle timer: {:?}", e),
        }

        if s.borrow().enhanced {
            apply_intensity(&doc, &s, pos);
        }
    });

    let s = spot.clone();
    dom::add_listener(document, "mouseleave", move |_: web::MouseEvent| {
        let mut sp = s.borrow_mut();
        sp.idle_timer = None;
        sp.state.pointer_left();
        sp.write_opacity();
    });

    let s = spot.clone();
    dom::add_listener(document, "mouseenter", move |_: web::MouseEvent| {
        let mut sp = s.borrow_mut();
        if sp.state.pointer_entered() {
            sp.write_opacity();
        }
    });
}

fn apply_intensity(document: &web::Document, spot: &Shared, pos: Vec2) {
    let Some(target) = document.element_from_point(pos.x, pos.y) else {
        return;
    };
    let important = is_important(
        &target.tag_name(),
        target.class_list().contains(CODE_BLOCK_CLASS),
    );
    let rect = target.get_bounding_client_rect();
    let center = Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    );
    let intensity = proximity_intensity(pos, center, important);
    let mut sp = spot.borrow_mut();
    sp.state.apply_intensity(intensity);
    sp.write_opacity();
}
