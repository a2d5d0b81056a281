// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-player session state.

use crate::capability::TimerId;
use crate::state::PlaybackState;

/// Which action the play/resume click targets currently report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ClickMode {
    /// Clicks start ad playback.
    #[default]
    Play,
    /// Clicks resume a paused ad.
    Resume,
}

/// State owned by one [`Orchestrator`](crate::orchestrator::Orchestrator).
///
/// Holds at most one ads manager and at most one poll timer. The
/// `surface_detached` flag makes ad UI removal happen once per session.
#[derive(Debug)]
pub struct Session<M> {
    pub(crate) state: PlaybackState,
    pub(crate) manager: Option<M>,
    pub(crate) timer: Option<TimerId>,
    pub(crate) surface_detached: bool,
    pub(crate) click_mode: ClickMode,
    pub(crate) overlay_close_armed: bool,
}

impl<M> Default for Session<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Session<M> {
    /// Creates an idle session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: PlaybackState::Idle,
            manager: None,
            timer: None,
            surface_detached: false,
            click_mode: ClickMode::Play,
            overlay_close_armed: false,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// The active ads manager, if any.
    #[must_use]
    pub const fn manager(&self) -> Option<&M> {
        self.manager.as_ref()
    }

    /// The running poll timer, if any.
    #[must_use]
    pub const fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Returns `true` once the ad surface has been removed from the page.
    #[must_use]
    pub const fn surface_detached(&self) -> bool {
        self.surface_detached
    }

    /// What the click targets currently do.
    #[must_use]
    pub const fn click_mode(&self) -> ClickMode {
        self.click_mode
    }
}
