// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ad lifecycle events.
//!
//! The SDK reports progress through an ad break as a stream of [`AdEvent`]s.
//! Only the kinds in [`AdEventKind`] are understood; backends drop anything
//! else before it reaches the orchestrator.

/// Kind of an ad lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdEventKind {
    /// First event for an ad; tells whether it is linear or an overlay.
    Loaded,
    /// The ad started rendering.
    Started,
    /// The ad played to the end.
    Complete,
    /// The viewer skipped the ad.
    Skipped,
    /// The viewer closed the ad.
    UserClose,
    /// Every ad in the response has finished.
    AllAdsCompleted,
    /// The viewer clicked through the ad.
    Click,
    /// The content should pause because an ad is about to play.
    ContentPauseRequested,
    /// The content should resume because the ad break finished.
    ContentResumeRequested,
}

impl AdEventKind {
    /// Events the orchestrator subscribes to on every ads manager, in
    /// subscription order.
    ///
    /// `Skipped` and `UserClose` are handled if a backend delivers them but
    /// are not requested.
    pub const SUBSCRIBED: [Self; 7] = [
        Self::ContentPauseRequested,
        Self::ContentResumeRequested,
        Self::AllAdsCompleted,
        Self::Loaded,
        Self::Started,
        Self::Complete,
        Self::Click,
    ];

    /// Returns `true` if this event ends the ad session.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Complete | Self::Skipped | Self::UserClose | Self::AllAdsCompleted | Self::Click
        )
    }

    /// Returns a short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Started => "started",
            Self::Complete => "complete",
            Self::Skipped => "skipped",
            Self::UserClose => "user-close",
            Self::AllAdsCompleted => "all-ads-completed",
            Self::Click => "click",
            Self::ContentPauseRequested => "content-pause-requested",
            Self::ContentResumeRequested => "content-resume-requested",
        }
    }
}

/// What the SDK tells us about the ad an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdDescriptor {
    /// `true` for in-stream video ads, `false` for overlays.
    pub linear: bool,
}

/// An ad lifecycle notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdEvent {
    /// What happened.
    pub kind: AdEventKind,
    /// The ad involved. Session-level events such as
    /// [`AllAdsCompleted`](AdEventKind::AllAdsCompleted) carry none.
    pub ad: Option<AdDescriptor>,
}

impl AdEvent {
    /// An event about a linear ad.
    #[must_use]
    pub const fn linear(kind: AdEventKind) -> Self {
        Self {
            kind,
            ad: Some(AdDescriptor { linear: true }),
        }
    }

    /// An event about a non-linear (overlay) ad.
    #[must_use]
    pub const fn non_linear(kind: AdEventKind) -> Self {
        Self {
            kind,
            ad: Some(AdDescriptor { linear: false }),
        }
    }

    /// An event with no ad attached.
    #[must_use]
    pub const fn bare(kind: AdEventKind) -> Self {
        Self { kind, ad: None }
    }

    /// Returns `true` if the event carries a linear ad.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.ad.is_some_and(|ad| ad.linear)
    }
}
