use crate::dom;
use crate::timers::{Interval, Timeout};
use enhance_core::{
    circle_class, circle_css, container_css, place_circle, BuildTimers, Debounce,
    BACKGROUND_RESIZE_DEBOUNCE_MS, CIRCLE_CONFIG, CIRCLE_REMOVE_AFTER_MS,
    CIRCLE_RESPAWN_INTERVAL_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const CONTAINER_CLASS: &str = "flowing-background";

struct BackgroundState {
    document: web::Document,
    container: Option<web::HtmlElement>,
    timers: BuildTimers<Timeout, Interval>,
    resize: Debounce,
    resize_timer: Option<Timeout>,
}

type Shared = Rc<RefCell<BackgroundState>>;

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let state = Rc::new(RefCell::new(BackgroundState {
        document: document.clone(),
        container: None,
        timers: BuildTimers::new(),
        resize: Debounce::new(BACKGROUND_RESIZE_DEBOUNCE_MS),
        resize_timer: None,
    }));
    build(&state)?;
    wire_resize(&state);
    wire_unload(&state);
    Ok(())
}

/// Cancel every timer of the current build and remove its container.
fn teardown(state: &Shared) {
    let (container, document) = {
        let mut s = state.borrow_mut();
        s.timers.cancel();
        (s.container.take(), s.document.clone())
    };
    if let Some(c) = container {
        c.remove();
    }
    // A container left by an earlier load of the module.
    while let Some(stale) = dom::query(&document, &format!(".{}", CONTAINER_CLASS)) {
        stale.remove();
    }
}

fn build(state: &Shared) -> anyhow::Result<()> {
    teardown(state);

    let document = state.borrow().document.clone();
    let body = dom::body(&document)?;
    let container = dom::create_html(&document, "div")?;
    container.set_class_name(CONTAINER_CLASS);
    container.style().set_css_text(&container_css());
    let first = body.first_child();
    body.insert_before(&container, first.as_ref())
        .map_err(dom::js_err)?;
    state.borrow_mut().container = Some(container);

    for (index, desc) in CIRCLE_CONFIG.iter().enumerate() {
        let st = state.clone();
        let first = Timeout::new(desc.delay_ms, move || spawn(&st, index))?;
        let st = state.clone();
        let every = Interval::new(CIRCLE_RESPAWN_INTERVAL_MS, move || spawn(&st, index))?;
        state.borrow_mut().timers.schedule(first, every);
    }
    log::info!("[background] built with {} circles", CIRCLE_CONFIG.len());
    Ok(())
}

fn spawn(state: &Shared, index: usize) {
    let desc = CIRCLE_CONFIG[index];
    let (document, container) = {
        let s = state.borrow();
        (s.document.clone(), s.container.clone())
    };
    let Some(container) = container else {
        return;
    };

    let placement = place_circle(&desc, dom::viewport_height(), &mut rand::thread_rng());
    let circle = match dom::create_html(&document, "div") {
        Ok(el) => el,
        Err(e) => {
            log::error!("[background] spawn {}: {:?}", index, e);
            return;
        }
    };
    circle.set_class_name(&circle_class(desc.size));
    circle.style().set_css_text(&circle_css(&placement));
    if let Err(e) = container.append_child(&circle) {
        log::error!("[background] spawn {}: {:?}", index, e);
        return;
    }
    log::debug!(
        "[background] circle {} size={} top={:.0} left={}",
        index,
        placement.size_px,
        placement.top_px,
        placement.left_px
    );

    let doomed = circle.clone();
    match Timeout::new(CIRCLE_REMOVE_AFTER_MS, move || {
        if doomed.parent_node().is_some() {
            doomed.remove();
        }
    }) {
        Ok(t) => state.borrow_mut().timers.track_removal(t),
        Err(e) => log::error!("[background] removal timer: {:?}", e),
    }
}

fn wire_resize(state: &Shared) {
    let Some(window) = web::window() else {
        return;
    };
    let state = state.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        let (generation, delay) = {
            let mut s = state.borrow_mut();
            (s.resize.trigger(), s.resize.delay_ms())
        };
        let st = state.clone();
        let timer = Timeout::new(delay, move || {
            let due = st.borrow_mut().resize.fire(generation);
            if due {
                if let Err(e) = build(&st) {
                    log::error!("[background] rebuild: {:?}", e);
                }
            }
        });
        match timer {
            // Replacing the handle clears the previous pending timer.
            Ok(t) => state.borrow_mut().resize_timer = Some(t),
            Err(e) => log::error!("[background] resize timer: {:?}", e),
        }
    });
}

fn wire_unload(state: &Shared) {
    let Some(window) = web::window() else {
        return;
    };
    let state = state.clone();
    dom::add_listener(&window, "beforeunload", move |_: web::Event| {
        state.borrow_mut().resize.cancel();
        teardown(&state);
    });
}
