// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted ad session for exercising the sinks against a real
//! [`Orchestrator`].

use preroll_core::capability::{
    AdSdk, AdsManager, AdsManagerLoaded, AdsRequest, ClickAction, Page, RenderingSettings,
    TimerId, Timers, UiRole,
};
use preroll_core::config::{PrerollConfig, ViewMode};
use preroll_core::error::AdError;
use preroll_core::event::{AdEvent, AdEventKind};
use preroll_core::orchestrator::Orchestrator;
use preroll_core::trace::SessionSink;

pub(crate) struct QuietSdk;

impl AdSdk for QuietSdk {
    type Loaded = QuietLoaded;

    fn set_locale(&mut self, _locale: &str) {}

    fn create_display_container(&mut self, _container: UiRole) -> Result<(), AdError> {
        Ok(())
    }

    fn initialize_display_container(&mut self) {}

    fn create_loader(&mut self) -> Result<(), AdError> {
        Ok(())
    }

    fn request_ads(&mut self, _request: &AdsRequest<'_>) -> Result<(), AdError> {
        Ok(())
    }

    fn content_complete(&mut self) {}
}

pub(crate) struct QuietLoaded;

impl AdsManagerLoaded for QuietLoaded {
    type Manager = QuietManager;

    fn ads_manager(
        self,
        _content: UiRole,
        _settings: &RenderingSettings,
    ) -> Result<QuietManager, AdError> {
        Ok(QuietManager)
    }
}

pub(crate) struct QuietManager;

impl AdsManager for QuietManager {
    fn subscribe_errors(&mut self) {}

    fn subscribe(&mut self, _kinds: &[AdEventKind]) {}

    fn init(&mut self, _width: u32, _height: u32, _view_mode: ViewMode) -> Result<(), AdError> {
        Ok(())
    }

    fn start(&mut self) -> Result<(), AdError> {
        Ok(())
    }

    fn resume(&mut self) {}

    fn destroy(&mut self) {}

    fn remaining_time(&self) -> f64 {
        3.0
    }
}

pub(crate) struct QuietPage;

impl Page for QuietPage {
    fn locate(&mut self, _role: UiRole, _selector: &str) -> bool {
        true
    }

    fn set_visible(&mut self, _role: UiRole, _visible: bool) {}

    fn bind_click(&mut self, _role: UiRole, _action: ClickAction) {}

    fn unbind_click(&mut self, _role: UiRole, _action: ClickAction) {}

    fn bind_content_ended(&mut self) {}

    fn detach(&mut self, _role: UiRole) -> bool {
        true
    }

    fn rendered_size(&self, _role: UiRole) -> (u32, u32) {
        (640, 360)
    }

    fn load_content(&mut self) {}

    fn play_content(&mut self) {}

    fn pause_content(&mut self) {}
}

#[derive(Default)]
pub(crate) struct CountingTimers(i32);

impl Timers for CountingTimers {
    fn set_interval(&mut self, _period_ms: u32) -> Option<TimerId> {
        self.0 += 1;
        Some(TimerId(self.0))
    }

    fn clear_interval(&mut self, _id: TimerId) {}
}

/// Runs one linear pre-roll from request to completion, reporting to `sink`.
pub(crate) fn linear_session<K: SessionSink>(sink: &mut K) {
    let mut orch = Orchestrator::new(
        Some(QuietSdk),
        QuietPage,
        CountingTimers::default(),
        PrerollConfig::new(),
    )
    .with_sink(sink);
    orch.init().unwrap();
    orch.on_ads_manager_loaded(QuietLoaded);
    orch.on_click(ClickAction::PlayAds);
    orch.on_ad_event(AdEvent::linear(AdEventKind::Started));
    orch.on_ad_event(AdEvent::linear(AdEventKind::Complete));
}
