use crate::dom;
use crate::timers::Timeout;
use enhance_core::constants::{GUTTER_PRE_PADDING, GUTTER_RESIZE_DEBOUNCE_MS};
use enhance_core::line_numbers::*;
use enhance_core::Debounce;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A standing interest in elements inserted into the document: `handler` runs
/// for every added element matching `predicate`, and for every descendant
/// matching `selector` when the element itself does not match.
pub struct Subscription {
    pub predicate: fn(&web::Element) -> bool,
    pub selector: &'static str,
    pub handler: fn(&web::Element) -> bool,
}

impl Subscription {
    pub fn dispatch(&self, node: &web::Node) {
        let Some(el) = node.dyn_ref::<web::Element>() else {
            return;
        };
        if (self.predicate)(el) {
            (self.handler)(el);
            return;
        }
        for matched in query_all(el, self.selector) {
            (self.handler)(&matched);
        }
    }
}

fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

fn is_undecorated_block(el: &web::Element) -> bool {
    let cl = el.class_list();
    cl.contains(CODE_BLOCK_CLASS) && !cl.contains(DECORATED_CLASS)
}

/// A `.highlight` element seen through the operations decoration needs.
struct HtmlCodeBlock<'a>(&'a web::Element);

impl HtmlCodeBlock<'_> {
    fn pre(&self) -> Option<web::Element> {
        dom::query_in(self.0, "pre")
    }
}

impl CodeBlock for HtmlCodeBlock<'_> {
    type Error = anyhow::Error;

    fn is_numbered(&self) -> bool {
        self.0.class_list().contains(DECORATED_CLASS)
            || dom::query_in(self.0, ALREADY_NUMBERED_SELECTOR).is_some()
    }

    fn code_text(&self) -> Option<String> {
        let pre = self.pre()?;
        let code = dom::query_in(&pre, "code").unwrap_or(pre);
        Some(code.text_content().unwrap_or_default())
    }

    fn attach_gutter(&self, content: &str) -> anyhow::Result<()> {
        let block = self.0;
        let pre = self.pre().ok_or_else(|| anyhow::anyhow!("code block lost its <pre>"))?;
        let document = block
            .owner_document()
            .ok_or_else(|| anyhow::anyhow!("code block has no document"))?;
        let gutter = document.create_element("div").map_err(dom::js_err)?;
        gutter.set_class_name(GUTTER_CLASS);
        gutter
            .set_attribute("aria-hidden", "true")
            .map_err(dom::js_err)?;
        gutter
            .set_attribute("style", gutter_css())
            .map_err(dom::js_err)?;
        gutter.set_text_content(Some(content));

        if let Some(pre) = pre.dyn_ref::<web::HtmlElement>() {
            dom::set_style(pre, "padding-left", GUTTER_PRE_PADDING);
        }
        if let Some(block) = block.dyn_ref::<web::HtmlElement>() {
            dom::set_style(block, "position", "relative");
        }
        block.append_child(&gutter).map_err(dom::js_err)?;
        block
            .class_list()
            .add_1(DECORATED_CLASS)
            .map_err(dom::js_err)?;
        Ok(())
    }
}

fn decorate_element(block: &web::Element) -> bool {
    decorate(&HtmlCodeBlock(block))
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let body = dom::body(document)?;
    let decorated = query_all(&body, CODE_BLOCK_SELECTOR)
        .iter()
        .filter(|b| decorate_element(b))
        .count();
    log::info!("[lines] decorated {} code block(s)", decorated);

    observe(&body)?;
    wire_resize(document);
    Ok(())
}

fn observe(body: &web::HtmlElement) -> anyhow::Result<()> {
    let subscription = Subscription {
        predicate: is_undecorated_block,
        selector: UNDECORATED_SELECTOR,
        handler: decorate_element,
    };
    let callback = Closure::wrap(Box::new(
        move |records: js_sys::Array, _observer: web::MutationObserver| {
            for record in records.iter() {
                let Ok(record) = record.dyn_into::<web::MutationRecord>() else {
                    continue;
                };
                let added = record.added_nodes();
                for i in 0..added.length() {
                    if let Some(node) = added.item(i) {
                        subscription.dispatch(&node);
                    }
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);
    let observer =
        web::MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(dom::js_err)?;
    let options = web::MutationObserverInit::new();
    options.set_child_list(true);
    options.set_subtree(true);
    observer
        .observe_with_options(body, &options)
        .map_err(dom::js_err)?;
    callback.forget();
    Ok(())
}

/// Match each gutter's height to its code after the layout settles.
fn fit_gutters(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    for gutter in query_all(&body, &format!(".{}", GUTTER_CLASS)) {
        let Some(pre) = gutter
            .parent_element()
            .and_then(|block| dom::query_in(&block, "pre"))
        else {
            continue;
        };
        if let Some(gutter) = gutter.dyn_ref::<web::HtmlElement>() {
            dom::set_style(gutter, "height", &format!("{}px", pre.scroll_height()));
        }
    }
}

fn wire_resize(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let debounce = Rc::new(RefCell::new(Debounce::new(GUTTER_RESIZE_DEBOUNCE_MS)));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let document = document.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        let generation = debounce.borrow_mut().trigger();
        let d = debounce.clone();
        let doc = document.clone();
        let delay = debounce.borrow().delay_ms();
        match Timeout::new(delay, move || {
            let due = d.borrow_mut().fire(generation);
            if due {
                fit_gutters(&doc);
            }
        }) {
            Ok(t) => *pending.borrow_mut() = Some(t),
            Err(e) => log::error!("[lines] resize timer: {:?}", e),
        }
    });
}
