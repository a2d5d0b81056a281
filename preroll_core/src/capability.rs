// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability contract for platform integrations.
//!
//! The orchestrator never touches the ad SDK, the page, or the event loop
//! directly. A backend provides the following pieces:
//!
//! - **Ad SDK**: implements [`AdSdk`] to create the ad display container and
//!   loader and to submit the ad request. Results come back asynchronously:
//!   the backend hands an [`AdsManagerLoaded`] value to
//!   [`Orchestrator::on_ads_manager_loaded`], and loader errors to
//!   [`Orchestrator::on_ad_error`].
//!
//! - **Ads manager**: implements [`AdsManager`]. After
//!   [`subscribe`](AdsManager::subscribe) the backend forwards the requested
//!   events to [`Orchestrator::on_ad_event`].
//!
//! - **Page**: implements [`Page`] for element lookup, visibility, click
//!   bindings and the content media element. Clicks on a bound element are
//!   reported back through [`Orchestrator::on_click`] with the bound
//!   [`ClickAction`].
//!
//! - **Timers**: implements [`Timers`]. Each tick of an interval is reported
//!   through [`Orchestrator::poll_remaining_time`].
//!
//! The absence of an ad SDK is a normal configuration: the orchestrator is
//! constructed with `None` and degrades to content-only playback.
//!
//! # Re-entrancy
//!
//! Backends must not call back into the orchestrator from inside a trait
//! method. Events that a platform fires synchronously (for example an error
//! thrown while submitting a request) are queued and delivered once the
//! current handler has returned.
//!
//! [`Orchestrator::on_ads_manager_loaded`]: crate::orchestrator::Orchestrator::on_ads_manager_loaded
//! [`Orchestrator::on_ad_error`]: crate::orchestrator::Orchestrator::on_ad_error
//! [`Orchestrator::on_ad_event`]: crate::orchestrator::Orchestrator::on_ad_event
//! [`Orchestrator::on_click`]: crate::orchestrator::Orchestrator::on_click
//! [`Orchestrator::poll_remaining_time`]: crate::orchestrator::Orchestrator::poll_remaining_time

use core::fmt;

use crate::config::{AdSlot, ViewMode};
use crate::error::AdError;
use crate::event::AdEventKind;

/// A player element the orchestrator manipulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UiRole {
    /// The content `<video>` element.
    ContentVideo,
    /// The play button overlay.
    PlayButton,
    /// The player wrapper removed when ad playback ends.
    AdSurface,
    /// The region ad creatives are rendered into.
    AdContainer,
    /// The video element inside the ad container, if the page has one.
    AdVideo,
}

impl UiRole {
    /// Number of roles.
    pub const COUNT: usize = 5;

    /// Roles that must be present for the orchestrator to start.
    pub const REQUIRED: [Self; 4] = [
        Self::ContentVideo,
        Self::PlayButton,
        Self::AdSurface,
        Self::AdContainer,
    ];

    /// Roles whose clicks start ad playback.
    pub const PLAY_TARGETS: [Self; 4] = Self::REQUIRED;

    /// Roles rewired to resume a paused ad.
    pub const RESUME_TARGETS: [Self; 3] = [Self::ContentVideo, Self::PlayButton, Self::AdContainer];

    /// Dense index, for backends that keep one slot per role.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ContentVideo => 0,
            Self::PlayButton => 1,
            Self::AdSurface => 2,
            Self::AdContainer => 3,
            Self::AdVideo => 4,
        }
    }

    /// Returns a short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ContentVideo => "content video",
            Self::PlayButton => "play button",
            Self::AdSurface => "ad surface",
            Self::AdContainer => "ad container",
            Self::AdVideo => "ad video",
        }
    }
}

impl fmt::Display for UiRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a click on a bound element asks the orchestrator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickAction {
    /// Start ad playback (first interaction).
    PlayAds,
    /// Resume a paused ad.
    ResumeAd,
    /// Dismiss an overlay ad and remove the ad UI.
    RemoveAdUi,
}

/// Identifies a running interval timer.
///
/// Backends assign these; core treats them as opaque.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimerId(pub i32);

impl fmt::Debug for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimerId({})", self.0)
    }
}

/// An ad request as submitted to the SDK.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdsRequest<'a> {
    /// VAST/VMAP ad tag.
    pub ad_tag_url: &'a str,
    /// Slot size for linear ads.
    pub linear_slot: AdSlot,
    /// Slot size for non-linear ads.
    pub non_linear_slot: AdSlot,
}

/// Rendering settings applied when obtaining an ads manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderingSettings {
    /// Restore the content element's source and position after each break.
    pub restore_custom_playback_state_on_ad_break_complete: bool,
}

/// The ad SDK: display container, loader and request submission.
pub trait AdSdk {
    /// Delivered once per successful request; yields the ads manager.
    type Loaded: AdsManagerLoaded;

    /// Forces the SDK UI locale.
    fn set_locale(&mut self, locale: &str);

    /// Creates the ad display container inside the `container` element.
    fn create_display_container(&mut self, container: UiRole) -> Result<(), AdError>;

    /// Initializes the display container.
    ///
    /// Must run inside a user-gesture handler on mobile platforms.
    fn initialize_display_container(&mut self);

    /// Creates the ads loader and subscribes it to manager-loaded and error
    /// events.
    fn create_loader(&mut self) -> Result<(), AdError>;

    /// Submits an ad request through the loader.
    fn request_ads(&mut self, request: &AdsRequest<'_>) -> Result<(), AdError>;

    /// Tells the SDK the content finished so it can play post-rolls.
    fn content_complete(&mut self);
}

/// The result of a successful ad request.
pub trait AdsManagerLoaded {
    /// The ads manager type produced.
    type Manager: AdsManager;

    /// Obtains the ads manager bound to the `content` element.
    fn ads_manager(
        self,
        content: UiRole,
        settings: &RenderingSettings,
    ) -> Result<Self::Manager, AdError>;
}

/// One loaded ad session.
pub trait AdsManager {
    /// Subscribes to ad error events.
    fn subscribe_errors(&mut self);

    /// Subscribes to the given lifecycle events.
    fn subscribe(&mut self, kinds: &[AdEventKind]);

    /// Sizes the ad UI. Can fail on a malformed ad response.
    fn init(&mut self, width: u32, height: u32, view_mode: ViewMode) -> Result<(), AdError>;

    /// Starts ad playback. Can fail on a malformed ad response.
    fn start(&mut self) -> Result<(), AdError>;

    /// Resumes a paused ad.
    fn resume(&mut self);

    /// Releases the manager. Must tolerate a manager that never started.
    fn destroy(&mut self);

    /// Seconds left in the current ad.
    fn remaining_time(&self) -> f64;
}

/// The page hosting the player.
pub trait Page {
    /// Looks up the element for `role`. Returns `false` if nothing matches.
    fn locate(&mut self, role: UiRole, selector: &str) -> bool;

    /// Shows or hides an element. Unlocated roles are ignored.
    fn set_visible(&mut self, role: UiRole, visible: bool);

    /// Adds a click listener that reports `action`.
    fn bind_click(&mut self, role: UiRole, action: ClickAction);

    /// Removes a listener added by [`bind_click`](Self::bind_click). No-op if
    /// no such listener is bound.
    fn unbind_click(&mut self, role: UiRole, action: ClickAction);

    /// Adds a listener for the content element's `ended` event.
    fn bind_content_ended(&mut self);

    /// Removes an element from its parent. Returns `false` if it had no
    /// parent (already detached).
    fn detach(&mut self, role: UiRole) -> bool;

    /// Rendered width and height of an element in CSS pixels.
    fn rendered_size(&self, role: UiRole) -> (u32, u32);

    /// Loads (or resets) the content media element.
    fn load_content(&mut self);

    /// Plays the content media element.
    fn play_content(&mut self);

    /// Pauses the content media element.
    fn pause_content(&mut self);
}

/// Recurring timers.
pub trait Timers {
    /// Starts an interval. Returns `None` if the platform refused.
    fn set_interval(&mut self, period_ms: u32) -> Option<TimerId>;

    /// Stops an interval.
    fn clear_interval(&mut self, id: TimerId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_indices_are_dense() {
        let mut seen = [false; UiRole::COUNT];
        for role in [
            UiRole::ContentVideo,
            UiRole::PlayButton,
            UiRole::AdSurface,
            UiRole::AdContainer,
            UiRole::AdVideo,
        ] {
            assert!(!seen[role.index()], "{role} shares an index");
            seen[role.index()] = true;
        }
        assert!(seen.iter().all(|s| *s), "every slot should be used");
    }

    #[test]
    fn resume_targets_leave_surface_alone() {
        assert!(!UiRole::RESUME_TARGETS.contains(&UiRole::AdSurface));
        assert!(UiRole::PLAY_TARGETS.contains(&UiRole::AdSurface));
    }
}
