// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing browser callbacks into the orchestrator.

use alloc::rc::Weak;

use preroll_core::capability::ClickAction;
use preroll_core::error::AdError;
use preroll_core::event::AdEvent;
use preroll_core::orchestrator::Orchestrator;

use crate::ima::{ImaLoaded, ImaSdk};
use crate::mailbox::Mailbox;
use crate::page::DomPage;
use crate::timer::IntervalTimers;

pub(crate) type WebOrchestrator = Orchestrator<ImaSdk, DomPage, IntervalTimers>;
pub(crate) type WebMailbox = Mailbox<WebOrchestrator, Message>;

/// Everything a browser callback can ask of the orchestrator.
pub(crate) enum Message {
    Click(ClickAction),
    ContentEnded,
    ManagerLoaded(ImaLoaded),
    AdEvent(AdEvent),
    AdError(AdError),
    Poll,
    ShowPlayButton,
    ResumeAd,
    RemoveAdUi,
}

pub(crate) fn handle(orchestrator: &mut WebOrchestrator, message: Message) {
    match message {
        Message::Click(action) => orchestrator.on_click(action),
        Message::ContentEnded => orchestrator.on_content_ended(),
        Message::ManagerLoaded(loaded) => orchestrator.on_ads_manager_loaded(loaded),
        Message::AdEvent(event) => orchestrator.on_ad_event(event),
        Message::AdError(err) => orchestrator.on_ad_error(err),
        Message::Poll => {
            _ = orchestrator.poll_remaining_time();
        }
        Message::ShowPlayButton => orchestrator.show_play_button(),
        Message::ResumeAd => orchestrator.resume_ad(),
        Message::RemoveAdUi => orchestrator.remove_ad_ui(),
    }
}

/// A handle browser callbacks use to post messages.
///
/// Holds the mailbox weakly: the mailbox owns the backends that own the
/// callbacks, so a strong handle would form a cycle. Messages posted after
/// the player is gone are dropped.
#[derive(Clone, Debug)]
pub(crate) struct Dispatcher {
    mailbox: Weak<WebMailbox>,
}

impl Dispatcher {
    pub(crate) fn new(mailbox: Weak<WebMailbox>) -> Self {
        Self { mailbox }
    }

    pub(crate) fn send(&self, message: Message) {
        if let Some(mailbox) = self.mailbox.upgrade() {
            mailbox.post(message, handle);
        }
    }
}
