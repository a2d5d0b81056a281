// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording capability doubles for orchestrator tests.
//!
//! Every fake appends to one shared [`Log`], so tests can assert on the
//! interleaving of page, SDK, manager and timer calls.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::capability::{
    AdSdk, AdsManager, AdsManagerLoaded, AdsRequest, ClickAction, Page, RenderingSettings,
    TimerId, Timers, UiRole,
};
use crate::config::ViewMode;
use crate::error::AdError;
use crate::event::AdEventKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Locate(UiRole),
    Show(UiRole),
    Hide(UiRole),
    BindClick(UiRole, ClickAction),
    UnbindClick(UiRole, ClickAction),
    BindContentEnded,
    Detach { attached: bool },
    LoadContent,
    PlayContent,
    PauseContent,
    SetLocale(String),
    CreateDisplayContainer(UiRole),
    InitializeDisplayContainer,
    CreateLoader,
    RequestAds(String),
    ContentComplete,
    ManagerCreated { content: UiRole, restore: bool },
    SubscribeErrors,
    Subscribe(Vec<AdEventKind>),
    Init(u32, u32, ViewMode),
    Start,
    Resume,
    Destroy,
    RemainingTime,
    SetInterval(u32, TimerId),
    ClearInterval(TimerId),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Log(Rc<RefCell<Vec<Call>>>);

impl Log {
    fn push(&self, call: Call) {
        self.0.borrow_mut().push(call);
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.0.borrow().clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub(crate) fn since(&self, mark: usize) -> Vec<Call> {
        self.0.borrow()[mark..].to_vec()
    }

    pub(crate) fn contains(&self, call: &Call) -> bool {
        self.0.borrow().contains(call)
    }

    /// Index of the first matching call; panics if it never happened.
    pub(crate) fn position(&self, call: &Call) -> usize {
        self.0
            .borrow()
            .iter()
            .position(|c| c == call)
            .unwrap_or_else(|| panic!("{call:?} was never made"))
    }

    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.0.borrow().iter().filter(|c| pred(c)).count()
    }

    pub(crate) fn calls_matching(&self, pred: impl Fn(&Call) -> bool) -> Vec<Call> {
        self.0.borrow().iter().filter(|c| pred(c)).cloned().collect()
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub(crate) struct FakePage {
    log: Log,
    missing: Vec<UiRole>,
    attached: bool,
}

impl FakePage {
    pub(crate) fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            missing: Vec::new(),
            attached: true,
        }
    }

    pub(crate) fn without(mut self, role: UiRole) -> Self {
        self.missing.push(role);
        self
    }

    /// The surface starts out with no parent.
    pub(crate) fn detached(mut self) -> Self {
        self.attached = false;
        self
    }
}

impl Page for FakePage {
    fn locate(&mut self, role: UiRole, _selector: &str) -> bool {
        self.log.push(Call::Locate(role));
        !self.missing.contains(&role)
    }

    fn set_visible(&mut self, role: UiRole, visible: bool) {
        self.log.push(if visible {
            Call::Show(role)
        } else {
            Call::Hide(role)
        });
    }

    fn bind_click(&mut self, role: UiRole, action: ClickAction) {
        self.log.push(Call::BindClick(role, action));
    }

    fn unbind_click(&mut self, role: UiRole, action: ClickAction) {
        self.log.push(Call::UnbindClick(role, action));
    }

    fn bind_content_ended(&mut self) {
        self.log.push(Call::BindContentEnded);
    }

    fn detach(&mut self, role: UiRole) -> bool {
        assert_eq!(role, UiRole::AdSurface, "only the surface is ever detached");
        let attached = self.attached;
        self.attached = false;
        self.log.push(Call::Detach { attached });
        attached
    }

    fn rendered_size(&self, _role: UiRole) -> (u32, u32) {
        (640, 360)
    }

    fn load_content(&mut self) {
        self.log.push(Call::LoadContent);
    }

    fn play_content(&mut self) {
        self.log.push(Call::PlayContent);
    }

    fn pause_content(&mut self) {
        self.log.push(Call::PauseContent);
    }
}

// ---------------------------------------------------------------------------
// SDK
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub(crate) struct FakeSdk {
    log: Log,
    request_error: Option<&'static str>,
}

impl FakeSdk {
    pub(crate) fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            request_error: None,
        }
    }

    pub(crate) fn failing_request(mut self, message: &'static str) -> Self {
        self.request_error = Some(message);
        self
    }
}

impl AdSdk for FakeSdk {
    type Loaded = FakeLoaded;

    fn set_locale(&mut self, locale: &str) {
        self.log.push(Call::SetLocale(locale.into()));
    }

    fn create_display_container(&mut self, container: UiRole) -> Result<(), AdError> {
        self.log.push(Call::CreateDisplayContainer(container));
        Ok(())
    }

    fn initialize_display_container(&mut self) {
        self.log.push(Call::InitializeDisplayContainer);
    }

    fn create_loader(&mut self) -> Result<(), AdError> {
        self.log.push(Call::CreateLoader);
        Ok(())
    }

    fn request_ads(&mut self, request: &AdsRequest<'_>) -> Result<(), AdError> {
        self.log.push(Call::RequestAds(request.ad_tag_url.into()));
        match self.request_error {
            Some(message) => Err(AdError::Loader(message.into())),
            None => Ok(()),
        }
    }

    fn content_complete(&mut self) {
        self.log.push(Call::ContentComplete);
    }
}

/// How a [`FakeManager`] behaves.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ManagerScript {
    /// Fails `ads_manager` itself.
    pub(crate) create_error: Option<&'static str>,
    pub(crate) init_error: Option<&'static str>,
    pub(crate) start_error: Option<&'static str>,
    pub(crate) remaining: f64,
}

impl Default for ManagerScript {
    fn default() -> Self {
        Self {
            create_error: None,
            init_error: None,
            start_error: None,
            remaining: 12.5,
        }
    }
}

#[derive(Debug)]
pub(crate) struct FakeLoaded {
    log: Log,
    script: ManagerScript,
}

impl FakeLoaded {
    pub(crate) fn new(log: &Log, script: ManagerScript) -> Self {
        Self {
            log: log.clone(),
            script,
        }
    }
}

impl AdsManagerLoaded for FakeLoaded {
    type Manager = FakeManager;

    fn ads_manager(
        self,
        content: UiRole,
        settings: &RenderingSettings,
    ) -> Result<FakeManager, AdError> {
        self.log.push(Call::ManagerCreated {
            content,
            restore: settings.restore_custom_playback_state_on_ad_break_complete,
        });
        if let Some(message) = self.script.create_error {
            return Err(AdError::Manager(message.into()));
        }
        Ok(FakeManager {
            log: self.log,
            script: self.script,
        })
    }
}

#[derive(Debug)]
pub(crate) struct FakeManager {
    log: Log,
    script: ManagerScript,
}

impl AdsManager for FakeManager {
    fn subscribe_errors(&mut self) {
        self.log.push(Call::SubscribeErrors);
    }

    fn subscribe(&mut self, kinds: &[AdEventKind]) {
        self.log.push(Call::Subscribe(kinds.to_vec()));
    }

    fn init(&mut self, width: u32, height: u32, view_mode: ViewMode) -> Result<(), AdError> {
        self.log.push(Call::Init(width, height, view_mode));
        match self.script.init_error {
            Some(message) => Err(AdError::Start(message.into())),
            None => Ok(()),
        }
    }

    fn start(&mut self) -> Result<(), AdError> {
        self.log.push(Call::Start);
        match self.script.start_error {
            Some(message) => Err(AdError::Start(message.into())),
            None => Ok(()),
        }
    }

    fn resume(&mut self) {
        self.log.push(Call::Resume);
    }

    fn destroy(&mut self) {
        self.log.push(Call::Destroy);
    }

    fn remaining_time(&self) -> f64 {
        self.log.push(Call::RemainingTime);
        self.script.remaining
    }
}

// ---------------------------------------------------------------------------
// Timers
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub(crate) struct FakeTimers {
    log: Log,
    next: i32,
}

impl FakeTimers {
    pub(crate) fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            next: 0,
        }
    }
}

impl Timers for FakeTimers {
    fn set_interval(&mut self, period_ms: u32) -> Option<TimerId> {
        self.next += 1;
        let id = TimerId(self.next);
        self.log.push(Call::SetInterval(period_ms, id));
        Some(id)
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.log.push(Call::ClearInterval(id));
    }
}
