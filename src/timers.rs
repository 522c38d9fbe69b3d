//! Owned browser timers. Dropping a handle clears the underlying timer, so a
//! module cancels a whole schedule by dropping the handles it holds.
//!
//! A handle must not be dropped from inside its own callback.

use crate::dom::js_err;
use anyhow::anyhow;
use enhance_core::TimerHandle;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

pub struct Timeout {
    id: i32,
    fired: Rc<Cell<bool>>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: i32, mut f: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let closure = Closure::wrap(Box::new(move || {
            flag.set(true);
            f();
        }) as Box<dyn FnMut()>);
        let id = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(js_err)?;
        Ok(Self {
            id,
            fired,
            _closure: closure,
        })
    }

}

impl TimerHandle for Timeout {
    #[inline]
    fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if !self.fired.get() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(self.id);
            }
        }
    }
}

pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: i32, f: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(js_err)?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}
