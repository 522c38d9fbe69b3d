#![cfg(target_arch = "wasm32")]
use enhance_core::SPOTLIGHT_ENHANCED;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod dom;
mod line_numbers;
mod sidebar;
mod spotlight;
mod storage;
mod timers;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let doc = document.clone();
    dom::when_ready(&document, move || init(&doc));
    Ok(())
}

fn init(document: &web::Document) {
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("docs-enhance starting");

    if let Err(e) = line_numbers::init(document) {
        log::error!("[lines] init error: {:?}", e);
    }
    if let Err(e) = spotlight::init(document, SPOTLIGHT_ENHANCED) {
        log::error!("[spotlight] init error: {:?}", e);
    }
    if let Err(e) = background::init(document) {
        log::error!("[background] init error: {:?}", e);
    }
    if let Err(e) = sidebar::init(document) {
        log::error!("[sidebar] init error: {:?}", e);
    }
}
