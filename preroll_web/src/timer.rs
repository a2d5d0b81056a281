// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval` timers.

use alloc::boxed::Box;
use alloc::vec::Vec;

use preroll_core::capability::{TimerId, Timers};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::dispatch::{Dispatcher, Message};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setInterval")]
    fn js_set_interval(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn js_clear_interval(id: i32);
}

/// [`Timers`] backed by the global `setInterval`.
///
/// Every tick is delivered as a poll message. Closures live until their
/// interval is cleared or the timers are dropped.
pub(crate) struct IntervalTimers {
    dispatcher: Dispatcher,
    active: Vec<(TimerId, Closure<dyn FnMut()>)>,
}

impl core::fmt::Debug for IntervalTimers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let ids: Vec<TimerId> = self.active.iter().map(|(id, _)| *id).collect();
        f.debug_struct("IntervalTimers")
            .field("active", &ids)
            .finish_non_exhaustive()
    }
}

impl IntervalTimers {
    pub(crate) fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            active: Vec::new(),
        }
    }
}

impl Timers for IntervalTimers {
    fn set_interval(&mut self, period_ms: u32) -> Option<TimerId> {
        let dispatcher = self.dispatcher.clone();
        let closure = Closure::wrap(Box::new(move || {
            dispatcher.send(Message::Poll);
        }) as Box<dyn FnMut()>);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let id = TimerId(js_set_interval(closure.as_ref(), timeout));
        self.active.push((id, closure));
        Some(id)
    }

    fn clear_interval(&mut self, id: TimerId) {
        js_clear_interval(id.0);
        self.active.retain(|(active, _)| *active != id);
    }
}

impl Drop for IntervalTimers {
    fn drop(&mut self) {
        for (id, _) in self.active.drain(..) {
            js_clear_interval(id.0);
        }
    }
}
