// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! IMA pre-roll in front of a content video.
//!
//! On module start this wires the page in `index.html` to the IMA SDK and
//! publishes `showPlayButton()`, `resumeAd()` and `removeAdUi()` on `window`
//! for the page's own scripts.
//!
//! Build with: `wasm-pack build --target web demos/web_preroll`
//! Then serve `demos/web_preroll/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::rc::Rc;

use log::{LevelFilter, info};
use preroll_core::config::PrerollConfig;
use preroll_web::Player;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Starts the pre-roll session for the current page.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    preroll_web::init_console_logger(LevelFilter::Debug);

    if !preroll_web::ima_available() {
        info!("web_preroll: IMA SDK not loaded, content only");
    }

    let player = Rc::new(preroll_web::start(PrerollConfig::new())?);
    expose("showPlayButton", &player, Player::show_play_button)?;
    expose("resumeAd", &player, Player::resume_ad)?;
    expose("removeAdUi", &player, Player::remove_ad_ui)?;
    Ok(())
}

/// Publishes `action` as a global function named `name`.
fn expose(name: &str, player: &Rc<Player>, action: fn(&Player)) -> Result<(), JsValue> {
    let player = Rc::clone(player);
    let closure = Closure::wrap(Box::new(move || action(&player)) as Box<dyn FnMut()>);
    js_sys::Reflect::set(&js_sys::global(), &JsValue::from_str(name), closure.as_ref())?;
    // The page may call these for as long as it lives.
    closure.forget();
    Ok(())
}
