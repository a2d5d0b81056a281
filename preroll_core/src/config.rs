// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orchestrator configuration.
//!
//! Everything the orchestrator needs that is not discovered at runtime: the
//! ad tag, the slot sizes sent with each request, the page selectors for the
//! player elements, and how the remaining-time poll timer is managed.

use core::fmt;

use crate::capability::{AdsRequest, RenderingSettings, UiRole};

/// Ad tag requested by default.
pub const DEFAULT_AD_TAG_URL: &str = "https://srv224.com/zqglLIQRrbs0CBLPCttQ444RJqwH1Qps37TQhsd1SYs-39gLD6yYRoN91X7NladDIUAPt2TZARVCJMTlPIJ_e2iV0bQeMfoI";

/// SDK locale applied before any ad UI is created.
pub const DEFAULT_LOCALE: &str = "ru";

/// Period of the remaining-time poll timer for linear ads.
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 300;

/// One dimension of an ad slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotDimension {
    /// Relative to the player, e.g. `Percent(100)` for `"100%"`.
    Percent(u16),
    /// Absolute size in CSS pixels.
    Pixels(u32),
}

impl fmt::Display for SlotDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{p}%"),
            Self::Pixels(px) => write!(f, "{px}"),
        }
    }
}

/// Width and height of an ad slot.
///
/// The SDK uses slot sizes to pick a creative when several are returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdSlot {
    /// Slot width.
    pub width: SlotDimension,
    /// Slot height.
    pub height: SlotDimension,
}

impl AdSlot {
    /// A slot that fills the player.
    pub const FULL: Self = Self {
        width: SlotDimension::Percent(100),
        height: SlotDimension::Percent(100),
    };

    /// A fixed-size slot in CSS pixels.
    #[must_use]
    pub const fn pixels(width: u32, height: u32) -> Self {
        Self {
            width: SlotDimension::Pixels(width),
            height: SlotDimension::Pixels(height),
        }
    }
}

/// How the ads manager renders relative to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Rendered inside the player.
    #[default]
    Normal,
    /// Rendered fullscreen.
    Fullscreen,
}

impl ViewMode {
    /// Returns the SDK's name for this view mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fullscreen => "fullscreen",
        }
    }
}

/// When the remaining-time poll timer is cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TimerPolicy {
    /// Cancel on every terminal transition (complete, skip, close, click,
    /// all-complete, error).
    #[default]
    CancelOnTerminal,
    /// Cancel only when a linear ad completes. Other terminal paths leave the
    /// timer running, as older page scripts did.
    CancelOnCompleteOnly,
}

/// CSS selectors for the player elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selectors {
    /// The content `<video>` element.
    pub content_video: &'static str,
    /// The play button overlay.
    pub play_button: &'static str,
    /// The player wrapper removed when ad playback ends.
    pub ad_surface: &'static str,
    /// The region the SDK renders ad creatives into.
    pub ad_container: &'static str,
    /// The video element inside the ad container. Optional on the page.
    pub ad_video: &'static str,
}

impl Selectors {
    /// Selectors for the stock player markup.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content_video: "#adPlayer video",
            play_button: "#adPlayButton",
            ad_surface: "#adPlayer",
            ad_container: "#adContainer",
            ad_video: "#adContainer .mejs-mediaelement video",
        }
    }

    /// The selector for `role`.
    #[must_use]
    pub const fn get(&self, role: UiRole) -> &'static str {
        match role {
            UiRole::ContentVideo => self.content_video,
            UiRole::PlayButton => self.play_button,
            UiRole::AdSurface => self.ad_surface,
            UiRole::AdContainer => self.ad_container,
            UiRole::AdVideo => self.ad_video,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the [`Orchestrator`](crate::orchestrator::Orchestrator).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrerollConfig {
    /// Ad tag requested on startup.
    pub ad_tag_url: &'static str,
    /// SDK locale, if one should be forced.
    pub locale: Option<&'static str>,
    /// Slot size for linear (in-stream) ads.
    pub linear_slot: AdSlot,
    /// Slot size for non-linear (overlay) ads.
    pub non_linear_slot: AdSlot,
    /// View mode passed to the ads manager on start.
    pub view_mode: ViewMode,
    /// Remaining-time poll period in milliseconds.
    pub poll_interval_ms: u32,
    /// When the poll timer is cancelled.
    pub timer_policy: TimerPolicy,
    /// Ask the SDK to restore content playback state after each ad break.
    pub restore_playback_state: bool,
    /// Page selectors for the player elements.
    pub selectors: Selectors,
}

impl PrerollConfig {
    /// Default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ad_tag_url: DEFAULT_AD_TAG_URL,
            locale: Some(DEFAULT_LOCALE),
            linear_slot: AdSlot::FULL,
            non_linear_slot: AdSlot::pixels(640, 150),
            view_mode: ViewMode::Normal,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            timer_policy: TimerPolicy::CancelOnTerminal,
            restore_playback_state: true,
            selectors: Selectors::new(),
        }
    }

    /// Default configuration with the poll timer only cancelled on complete.
    #[must_use]
    pub const fn legacy() -> Self {
        let mut cfg = Self::new();
        cfg.timer_policy = TimerPolicy::CancelOnCompleteOnly;
        cfg
    }

    /// Returns a copy requesting `url` instead of the default ad tag.
    #[must_use]
    pub const fn with_ad_tag_url(mut self, url: &'static str) -> Self {
        self.ad_tag_url = url;
        self
    }

    /// Builds the ad request submitted on startup.
    #[must_use]
    pub const fn ads_request(&self) -> AdsRequest<'static> {
        AdsRequest {
            ad_tag_url: self.ad_tag_url,
            linear_slot: self.linear_slot,
            non_linear_slot: self.non_linear_slot,
        }
    }

    /// Builds the rendering settings used when obtaining an ads manager.
    #[must_use]
    pub const fn rendering_settings(&self) -> RenderingSettings {
        RenderingSettings {
            restore_custom_playback_state_on_ad_break_complete: self.restore_playback_state,
        }
    }
}

impl Default for PrerollConfig {
    fn default() -> Self {
        Self::new()
    }
}
