// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit playback state machine.
//!
//! Every change to the session's lifecycle goes through
//! [`PlaybackState::next`], a pure transition table. Inputs that make no sense
//! in the current state yield `None` and are ignored by the orchestrator.
//!
//! ```text
//!   Idle ──RequestSubmitted──► AdRequested ──ManagerLoaded──► AdLoaded
//!                                                               │
//!                                                            Started
//!                                                               ▼
//!                               AdPaused ◄──Paused── AdPlaying ─┘
//!                                   └──────Resumed──────►┘
//!
//!   any state ──Terminal──► Terminated (absorbing)
//! ```

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The ad request was submitted; waiting for the ads manager.
    AdRequested,
    /// An ads manager is available; waiting for the user to press play.
    AdLoaded,
    /// The ads manager was started.
    AdPlaying,
    /// The ad is paused and the play button offers to resume it.
    AdPaused,
    /// The ad UI was torn down. Content plays on its own from here.
    Terminated,
}

/// Something that moves the session between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    /// The ad request was submitted.
    RequestSubmitted,
    /// The SDK delivered an ads manager.
    ManagerLoaded,
    /// The ads manager started, or reported an ad as started.
    Started,
    /// The page paused the ad and showed the play button.
    Paused,
    /// The user resumed a paused ad.
    Resumed,
    /// A terminal event, an error, or an explicit teardown.
    Terminal,
}

impl Input {
    /// Returns a short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequestSubmitted => "request-submitted",
            Self::ManagerLoaded => "manager-loaded",
            Self::Started => "started",
            Self::Paused => "paused",
            Self::Resumed => "resumed",
            Self::Terminal => "terminal",
        }
    }
}

impl PlaybackState {
    /// Returns the state reached from `self` on `input`, or `None` if the
    /// input is ignored in this state.
    #[must_use]
    pub const fn next(self, input: Input) -> Option<Self> {
        match (self, input) {
            (Self::Terminated, _) => None,
            (_, Input::Terminal) => Some(Self::Terminated),
            (Self::Idle, Input::RequestSubmitted) => Some(Self::AdRequested),
            (Self::AdRequested, Input::ManagerLoaded) => Some(Self::AdLoaded),
            (Self::AdLoaded, Input::Started) => Some(Self::AdPlaying),
            (Self::AdPlaying, Input::Paused) => Some(Self::AdPaused),
            (Self::AdPaused, Input::Resumed) => Some(Self::AdPlaying),
            _ => None,
        }
    }

    /// Returns `true` if a user click may still start ad playback.
    #[must_use]
    pub const fn accepts_play(self) -> bool {
        matches!(self, Self::Idle | Self::AdRequested | Self::AdLoaded)
    }

    /// Returns `true` once the ad UI has been torn down.
    #[must_use]
    pub const fn is_terminated(self) -> bool {
        matches!(self, Self::Terminated)
    }

    /// Returns a short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AdRequested => "ad-requested",
            Self::AdLoaded => "ad-loaded",
            Self::AdPlaying => "ad-playing",
            Self::AdPaused => "ad-paused",
            Self::Terminated => "terminated",
        }
    }
}
