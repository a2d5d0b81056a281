// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for preroll.
//!
//! This crate connects [`preroll_core`] to a live page:
//!
//! - Google IMA bindings implementing the ad SDK capabilities
//! - A DOM page resolving the player elements by CSS selector
//! - `setInterval` timers for the remaining-time poll
//! - [`ConsoleLogger`], a `log` backend for the browser console
//!
//! Call [`start`] once the document is ready. Browser callbacks are queued
//! and delivered to the orchestrator one at a time, so a callback fired from
//! inside another handler never re-enters it.

#![no_std]

extern crate alloc;

mod bindings;
mod dispatch;
mod ima;
mod logger;
mod mailbox;
mod page;
mod timer;

use alloc::rc::Rc;
use alloc::string::ToString as _;

use preroll_core::config::PrerollConfig;
use preroll_core::orchestrator::Orchestrator;
use preroll_core::state::PlaybackState;
use wasm_bindgen::JsValue;

use dispatch::{Dispatcher, Message, WebMailbox, handle};
use ima::ImaSdk;
use page::{DomPage, Elements};
use timer::IntervalTimers;

pub use logger::{ConsoleLogger, init_console_logger};

/// Returns `true` if the IMA SDK script has loaded.
#[must_use]
pub fn ima_available() -> bool {
    bindings::ima_available()
}

/// Builds the orchestrator for the current document and initializes it.
///
/// If the IMA SDK is missing the player degrades to content-only playback
/// and this still succeeds. Fails if there is no document or a required
/// player element cannot be found.
pub fn start(config: PrerollConfig) -> Result<Player, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("preroll: no document"))?;

    let mailbox = Rc::new_cyclic(|weak| {
        let dispatcher = Dispatcher::new(weak.clone());
        let elements = Rc::new(Elements::default());
        let sdk = ImaSdk::detect(Rc::clone(&elements), dispatcher.clone());
        let page = DomPage::new(document, elements, dispatcher.clone());
        let timers = IntervalTimers::new(dispatcher);
        WebMailbox::new(Orchestrator::new(sdk, page, timers, config))
    });

    let result = mailbox.with(|orchestrator| orchestrator.init());
    // Anything the SDK fired synchronously during setup.
    mailbox.drain(handle);
    match result {
        Some(Ok(())) => Ok(Player { mailbox }),
        Some(Err(err)) => Err(JsValue::from_str(&err.to_string())),
        None => Err(JsValue::from_str("preroll: orchestrator busy during start")),
    }
}

/// A running preroll session.
///
/// Dropping the player releases the page listeners and timers; SDK
/// listeners outlive it and become no-ops.
pub struct Player {
    mailbox: Rc<WebMailbox>,
}

impl core::fmt::Debug for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Player")
            .field("state", &self.state())
            .field("pending", &self.mailbox.pending())
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Shows the play button and makes the next click resume the ad.
    pub fn show_play_button(&self) {
        self.mailbox.post(Message::ShowPlayButton, handle);
    }

    /// Hides the play button and resumes the paused ad.
    pub fn resume_ad(&self) {
        self.mailbox.post(Message::ResumeAd, handle);
    }

    /// Tears down the ad UI.
    pub fn remove_ad_ui(&self) {
        self.mailbox.post(Message::RemoveAdUi, handle);
    }

    /// Current playback state, or `None` while a handler is running.
    #[must_use]
    pub fn state(&self) -> Option<PlaybackState> {
        self.mailbox.with(|orchestrator| orchestrator.state())
    }
}
