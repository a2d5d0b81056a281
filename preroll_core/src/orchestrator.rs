// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ad playback orchestrator.
//!
//! [`Orchestrator`] owns one [`Session`] and reacts to three sources of input:
//!
//! - **User clicks**, reported by the page as a [`ClickAction`] through
//!   [`on_click`](Orchestrator::on_click).
//! - **SDK callbacks**: [`on_ads_manager_loaded`](Orchestrator::on_ads_manager_loaded),
//!   [`on_ad_event`](Orchestrator::on_ad_event) and
//!   [`on_ad_error`](Orchestrator::on_ad_error).
//! - **Timer ticks**, through [`poll_remaining_time`](Orchestrator::poll_remaining_time).
//!
//! Handlers run to completion; the orchestrator never waits. Every terminal
//! path funnels into [`remove_ad_ui`](Orchestrator::remove_ad_ui), which moves
//! the session to [`PlaybackState::Terminated`] and detaches the ad surface at
//! most once.

use core::fmt;

use log::{debug, error, trace, warn};

use crate::capability::{AdSdk, AdsManager, AdsManagerLoaded, ClickAction, Page, Timers, UiRole};
use crate::config::{PrerollConfig, TimerPolicy};
use crate::error::{AdError, MissingElement};
use crate::event::{AdEvent, AdEventKind};
use crate::session::{ClickMode, Session};
use crate::state::{Input, PlaybackState};
use crate::trace::{
    AdErrorRecord, AdEventRecord, DetachEvent, NoopSink, SessionSink, TimerAction, TimerEvent,
    TransitionEvent,
};

/// The ads manager type produced by an [`AdSdk`].
pub type ManagerOf<S> = <<S as AdSdk>::Loaded as AdsManagerLoaded>::Manager;

/// Wires one content player to an ad SDK.
///
/// Construct with [`new`](Self::new), optionally attach a sink with
/// [`with_sink`](Self::with_sink), then call [`init`](Self::init) once the
/// page is ready. Pass `None` as the SDK when it failed to load; the
/// orchestrator then removes the ad UI and leaves the content alone.
pub struct Orchestrator<S: AdSdk, P, T, K = NoopSink> {
    sdk: Option<S>,
    page: P,
    timers: T,
    config: PrerollConfig,
    session: Session<ManagerOf<S>>,
    sink: K,
    seq: u64,
}

impl<S: AdSdk, P, T, K> fmt::Debug for Orchestrator<S, P, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("has_sdk", &self.sdk.is_some())
            .field("state", &self.session.state)
            .field("has_manager", &self.session.manager.is_some())
            .field("timer", &self.session.timer)
            .field("surface_detached", &self.session.surface_detached)
            .field("click_mode", &self.session.click_mode)
            .finish_non_exhaustive()
    }
}

impl<S: AdSdk, P: Page, T: Timers> Orchestrator<S, P, T> {
    /// Creates an orchestrator in the [`Idle`](PlaybackState::Idle) state.
    #[must_use]
    pub fn new(sdk: Option<S>, page: P, timers: T, config: PrerollConfig) -> Self {
        Self {
            sdk,
            page,
            timers,
            config,
            session: Session::new(),
            sink: NoopSink,
            seq: 0,
        }
    }
}

impl<S: AdSdk, P: Page, T: Timers, K: SessionSink> Orchestrator<S, P, T, K> {
    /// Replaces the diagnostics sink.
    #[must_use]
    pub fn with_sink<K2: SessionSink>(self, sink: K2) -> Orchestrator<S, P, T, K2> {
        Orchestrator {
            sdk: self.sdk,
            page: self.page,
            timers: self.timers,
            config: self.config,
            session: self.session,
            sink,
            seq: self.seq,
        }
    }

    /// The session state.
    #[must_use]
    pub fn session(&self) -> &Session<ManagerOf<S>> {
        &self.session
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.session.state
    }

    /// The diagnostics sink.
    #[must_use]
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Locates the player elements, binds the play handlers and requests ads.
    ///
    /// Fails if a required element is missing; nothing is bound in that case.
    /// Without an SDK the ad UI is removed and no request is made. A request
    /// that fails synchronously goes through [`on_ad_error`](Self::on_ad_error).
    pub fn init(&mut self) -> Result<(), MissingElement> {
        let selectors = self.config.selectors;
        for role in UiRole::REQUIRED {
            let selector = selectors.get(role);
            if !self.page.locate(role, selector) {
                error!("preroll: {role} not found for selector `{selector}`");
                return Err(MissingElement { role, selector });
            }
        }
        if !self.page.locate(UiRole::AdVideo, selectors.get(UiRole::AdVideo)) {
            debug!("preroll: no ad video element on the page");
        }

        for role in UiRole::PLAY_TARGETS {
            self.page.bind_click(role, ClickAction::PlayAds);
        }

        if let Err(err) = self.request_ads() {
            self.on_ad_error(err);
        }
        Ok(())
    }

    fn request_ads(&mut self) -> Result<(), AdError> {
        let Some(sdk) = self.sdk.as_mut() else {
            return Err(AdError::CapabilityUnavailable);
        };

        if let Some(locale) = self.config.locale {
            sdk.set_locale(locale);
        }
        sdk.create_display_container(UiRole::AdContainer)?;
        sdk.create_loader()?;
        self.page.bind_content_ended();

        let request = self.config.ads_request();
        sdk.request_ads(&request)?;
        debug!("preroll: requested ads from {}", request.ad_tag_url);
        self.transition(Input::RequestSubmitted);
        Ok(())
    }

    /// Dispatches a click on a bound element.
    pub fn on_click(&mut self, action: ClickAction) {
        match action {
            ClickAction::PlayAds => self.play_ads(),
            ClickAction::ResumeAd => self.resume_ad(),
            ClickAction::RemoveAdUi => self.remove_ad_ui(),
        }
    }

    /// Starts ad playback in response to the first user interaction.
    ///
    /// Loads the content, initializes the display container, swaps the play
    /// button for the content element, then initializes and starts the ads
    /// manager at the ad surface's rendered size. If that fails the content
    /// plays directly and the failure is handled like any other ad error.
    pub fn play_ads(&mut self) {
        if !self.session.state.accepts_play() {
            debug!(
                "preroll: play ignored while {}",
                self.session.state.as_str()
            );
            return;
        }

        self.page.load_content();
        if let Some(sdk) = self.sdk.as_mut() {
            sdk.initialize_display_container();
        }
        self.page.set_visible(UiRole::PlayButton, false);
        self.page.set_visible(UiRole::ContentVideo, true);
        self.page.set_visible(UiRole::AdVideo, true);

        match self.start_manager() {
            Ok(()) => {
                self.transition(Input::Started);
            }
            Err(err) => {
                warn!("preroll: could not start ads: {err}");
                self.page.play_content();
                self.on_ad_error(err);
            }
        }
    }

    fn start_manager(&mut self) -> Result<(), AdError> {
        let (width, height) = self.page.rendered_size(UiRole::AdSurface);
        let view_mode = self.config.view_mode;
        let manager = self
            .session
            .manager
            .as_mut()
            .ok_or(AdError::ManagerNotLoaded)?;
        manager.init(width, height, view_mode)?;
        manager.start()
    }

    /// Takes the ads manager from a successful request and subscribes to its
    /// events.
    pub fn on_ads_manager_loaded(&mut self, loaded: S::Loaded) {
        let settings = self.config.rendering_settings();
        let mut manager = match loaded.ads_manager(UiRole::ContentVideo, &settings) {
            Ok(manager) => manager,
            Err(err) => {
                self.on_ad_error(err);
                return;
            }
        };

        if self.session.state.is_terminated() {
            debug!("preroll: ads manager arrived after teardown, releasing it");
            manager.destroy();
            return;
        }

        manager.subscribe_errors();
        manager.subscribe(&AdEventKind::SUBSCRIBED);
        if let Some(mut prior) = self.session.manager.replace(manager) {
            prior.destroy();
        }
        self.transition(Input::ManagerLoaded);
    }

    /// Reacts to an ad lifecycle event.
    pub fn on_ad_event(&mut self, event: AdEvent) {
        let seq = self.next_seq();
        self.sink.on_ad_event(&AdEventRecord {
            seq,
            state: self.session.state,
            event,
        });
        debug!(
            "preroll: ad event {} (linear: {})",
            event.kind.as_str(),
            event.is_linear()
        );

        if event.kind.is_terminal() {
            if event.kind == AdEventKind::Complete && event.is_linear() {
                self.cancel_timer();
            }
            self.remove_ad_ui();
            return;
        }

        match event.kind {
            AdEventKind::ContentPauseRequested => self.page.pause_content(),
            AdEventKind::ContentResumeRequested => self.page.play_content(),
            AdEventKind::Loaded | AdEventKind::Started if self.session.state.is_terminated() => {
                debug!("preroll: {} after teardown ignored", event.kind.as_str());
            }
            AdEventKind::Loaded => {
                if !event.is_linear() {
                    // Overlays float over playing content.
                    self.page.play_content();
                    if !self.session.overlay_close_armed {
                        self.page
                            .bind_click(UiRole::AdContainer, ClickAction::RemoveAdUi);
                        self.session.overlay_close_armed = true;
                    }
                }
            }
            AdEventKind::Started => {
                if event.is_linear() {
                    self.arm_timer();
                }
                self.transition(Input::Started);
            }
            // Terminal kinds returned above.
            AdEventKind::Complete
            | AdEventKind::Skipped
            | AdEventKind::UserClose
            | AdEventKind::AllAdsCompleted
            | AdEventKind::Click => {}
        }
    }

    /// Handles an ad error from the loader, the manager, or a failed start.
    ///
    /// Removes the ad UI and releases the ads manager if there is one.
    pub fn on_ad_error(&mut self, err: AdError) {
        let seq = self.next_seq();
        self.sink.on_ad_error(&AdErrorRecord {
            seq,
            state: self.session.state,
            error: err.clone(),
        });
        warn!("preroll: {err}");

        self.remove_ad_ui();
        if let Some(mut manager) = self.session.manager.take() {
            manager.destroy();
        }
    }

    /// Forwards the content's `ended` event so the SDK can play post-rolls.
    pub fn on_content_ended(&mut self) {
        if let Some(sdk) = self.sdk.as_mut() {
            sdk.content_complete();
        }
    }

    /// Reads the remaining ad time on a poll tick.
    pub fn poll_remaining_time(&mut self) -> Option<f64> {
        let remaining = self.session.manager.as_ref()?.remaining_time();
        trace!("preroll: {remaining:.1}s of ad remaining");
        Some(remaining)
    }

    /// Shows the play button and makes the next click resume the ad.
    ///
    /// Only meaningful while an ad plays; ignored otherwise.
    pub fn show_play_button(&mut self) {
        if !self.transition(Input::Paused) {
            debug!(
                "preroll: play button not shown while {}",
                self.session.state.as_str()
            );
            return;
        }

        self.page.set_visible(UiRole::PlayButton, true);
        for role in UiRole::RESUME_TARGETS {
            self.page.unbind_click(role, ClickAction::PlayAds);
            self.page.unbind_click(role, ClickAction::ResumeAd);
            self.page.bind_click(role, ClickAction::ResumeAd);
        }
        self.session.click_mode = ClickMode::Resume;
    }

    /// Hides the play button and resumes the paused ad.
    pub fn resume_ad(&mut self) {
        if !self.transition(Input::Resumed) {
            debug!("preroll: resume ignored while {}", self.session.state.as_str());
            return;
        }

        self.page.set_visible(UiRole::PlayButton, false);
        if let Some(manager) = self.session.manager.as_mut() {
            manager.resume();
        }
    }

    /// Tears down the ad UI and ends the session.
    ///
    /// Safe to call any number of times; the surface is detached once.
    pub fn remove_ad_ui(&mut self) {
        if self.config.timer_policy == TimerPolicy::CancelOnTerminal {
            self.cancel_timer();
        }
        self.transition(Input::Terminal);

        if self.session.surface_detached {
            return;
        }
        self.session.surface_detached = true;
        let was_attached = self.page.detach(UiRole::AdSurface);
        if !was_attached {
            debug!("preroll: ad surface already had no parent");
        }
        let seq = self.next_seq();
        self.sink
            .on_surface_detached(&DetachEvent { seq, was_attached });
    }

    fn arm_timer(&mut self) {
        self.cancel_timer();
        let Some(id) = self.timers.set_interval(self.config.poll_interval_ms) else {
            warn!("preroll: could not start the remaining-time timer");
            return;
        };
        self.session.timer = Some(id);
        let seq = self.next_seq();
        self.sink.on_timer(&TimerEvent {
            seq,
            action: TimerAction::Armed,
            id,
        });
    }

    fn cancel_timer(&mut self) {
        let Some(id) = self.session.timer.take() else {
            return;
        };
        self.timers.clear_interval(id);
        let seq = self.next_seq();
        self.sink.on_timer(&TimerEvent {
            seq,
            action: TimerAction::Cleared,
            id,
        });
    }

    /// Applies `input` to the state machine. Returns `false` if ignored.
    fn transition(&mut self, input: Input) -> bool {
        let from = self.session.state;
        let Some(to) = from.next(input) else {
            return false;
        };
        self.session.state = to;
        debug!(
            "preroll: {} -> {} on {}",
            from.as_str(),
            to.as_str(),
            input.as_str()
        );
        let seq = self.next_seq();
        self.sink.on_transition(&TransitionEvent {
            seq,
            from,
            to,
            input,
        });
        true
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        seq
    }
}
