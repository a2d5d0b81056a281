// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Google IMA implementation of the ad SDK capabilities.
//!
//! SDK listeners are registered once per loader or manager and live for the
//! rest of the page, so their closures are leaked with `forget`.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString as _};

use preroll_core::capability::{
    AdSdk, AdsManager, AdsManagerLoaded, AdsRequest, RenderingSettings, UiRole,
};
use preroll_core::config::{SlotDimension, ViewMode};
use preroll_core::error::AdError;
use preroll_core::event::{AdDescriptor, AdEvent, AdEventKind};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use crate::bindings;
use crate::dispatch::{Dispatcher, Message};
use crate::page::Elements;

const ADS_MANAGER_LOADED: &str = "adsManagerLoaded";
const AD_ERROR: &str = "adError";

/// IMA `AdEvent.Type` string for an event kind.
pub(crate) const fn ima_event_type(kind: AdEventKind) -> &'static str {
    match kind {
        AdEventKind::Loaded => "loaded",
        AdEventKind::Started => "start",
        AdEventKind::Complete => "complete",
        AdEventKind::Skipped => "skip",
        AdEventKind::UserClose => "userClose",
        AdEventKind::AllAdsCompleted => "allAdsCompleted",
        AdEventKind::Click => "click",
        AdEventKind::ContentPauseRequested => "contentPauseRequested",
        AdEventKind::ContentResumeRequested => "contentResumeRequested",
    }
}

/// Best-effort text for a thrown JS value.
fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return err.message().into();
    }
    format!("{value:?}")
}

fn describe(event: &bindings::AdErrorEvent) -> String {
    let err = event.get_error();
    format!("{} (code {})", err.get_message(), err.get_error_code())
}

fn slot_value(dimension: SlotDimension) -> JsValue {
    match dimension {
        SlotDimension::Percent(_) => JsValue::from_str(&dimension.to_string()),
        SlotDimension::Pixels(px) => JsValue::from_f64(f64::from(px)),
    }
}

// ---------------------------------------------------------------------------
// SDK
// ---------------------------------------------------------------------------

/// [`AdSdk`] over `google.ima`.
pub(crate) struct ImaSdk {
    elements: Rc<Elements>,
    dispatcher: Dispatcher,
    container: Option<bindings::AdDisplayContainer>,
    loader: Option<bindings::AdsLoader>,
}

impl core::fmt::Debug for ImaSdk {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImaSdk")
            .field("has_container", &self.container.is_some())
            .field("has_loader", &self.loader.is_some())
            .finish_non_exhaustive()
    }
}

impl ImaSdk {
    /// Returns `None` if the SDK script did not load.
    pub(crate) fn detect(elements: Rc<Elements>, dispatcher: Dispatcher) -> Option<Self> {
        if !bindings::ima_available() {
            return None;
        }
        Some(Self {
            elements,
            dispatcher,
            container: None,
            loader: None,
        })
    }
}

impl AdSdk for ImaSdk {
    type Loaded = ImaLoaded;

    fn set_locale(&mut self, locale: &str) {
        bindings::set_locale(locale);
    }

    fn create_display_container(&mut self, container: UiRole) -> Result<(), AdError> {
        let el = self
            .elements
            .get(container)
            .ok_or_else(|| AdError::Loader(format!("{container} is not on the page")))?;
        let display = bindings::AdDisplayContainer::new(&el)
            .map_err(|e| AdError::Loader(js_message(&e)))?;
        self.container = Some(display);
        Ok(())
    }

    fn initialize_display_container(&mut self) {
        if let Some(display) = &self.container {
            display.initialize();
        }
    }

    fn create_loader(&mut self) -> Result<(), AdError> {
        let display = self
            .container
            .as_ref()
            .ok_or_else(|| AdError::Loader("no ad display container".to_string()))?;
        let loader =
            bindings::AdsLoader::new(display).map_err(|e| AdError::Loader(js_message(&e)))?;

        let elements = Rc::clone(&self.elements);
        let dispatcher = self.dispatcher.clone();
        let on_loaded = Closure::wrap(Box::new(move |event: bindings::AdsManagerLoadedEvent| {
            dispatcher.send(Message::ManagerLoaded(ImaLoaded {
                event,
                elements: Rc::clone(&elements),
                dispatcher: dispatcher.clone(),
            }));
        }) as Box<dyn FnMut(bindings::AdsManagerLoadedEvent)>);
        loader.add_event_listener(ADS_MANAGER_LOADED, on_loaded.as_ref().unchecked_ref(), false);
        on_loaded.forget();

        let dispatcher = self.dispatcher.clone();
        let on_error = Closure::wrap(Box::new(move |event: bindings::AdErrorEvent| {
            dispatcher.send(Message::AdError(AdError::Loader(describe(&event))));
        }) as Box<dyn FnMut(bindings::AdErrorEvent)>);
        loader.add_event_listener(AD_ERROR, on_error.as_ref().unchecked_ref(), false);
        on_error.forget();

        self.loader = Some(loader);
        Ok(())
    }

    fn request_ads(&mut self, request: &AdsRequest<'_>) -> Result<(), AdError> {
        let loader = self
            .loader
            .as_ref()
            .ok_or_else(|| AdError::Loader("no ads loader".to_string()))?;
        let ima_request =
            bindings::AdsRequest::new().map_err(|e| AdError::Loader(js_message(&e)))?;
        ima_request.set_ad_tag_url(request.ad_tag_url);
        ima_request.set_linear_ad_slot_width(&slot_value(request.linear_slot.width));
        ima_request.set_linear_ad_slot_height(&slot_value(request.linear_slot.height));
        ima_request.set_non_linear_ad_slot_width(&slot_value(request.non_linear_slot.width));
        ima_request.set_non_linear_ad_slot_height(&slot_value(request.non_linear_slot.height));
        loader
            .request_ads(&ima_request)
            .map_err(|e| AdError::Loader(js_message(&e)))
    }

    fn content_complete(&mut self) {
        if let Some(loader) = &self.loader {
            loader.content_complete();
        }
    }
}

// ---------------------------------------------------------------------------
// Manager
// ---------------------------------------------------------------------------

/// An `adsManagerLoaded` event waiting to be turned into a manager.
pub(crate) struct ImaLoaded {
    event: bindings::AdsManagerLoadedEvent,
    elements: Rc<Elements>,
    dispatcher: Dispatcher,
}

impl core::fmt::Debug for ImaLoaded {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImaLoaded").finish_non_exhaustive()
    }
}

impl AdsManagerLoaded for ImaLoaded {
    type Manager = ImaManager;

    fn ads_manager(
        self,
        content: UiRole,
        settings: &RenderingSettings,
    ) -> Result<ImaManager, AdError> {
        let video = self
            .elements
            .video(content)
            .ok_or_else(|| AdError::Manager(format!("{content} is not a video element")))?;
        let rendering =
            bindings::AdsRenderingSettings::new().map_err(|e| AdError::Manager(js_message(&e)))?;
        rendering.set_restore_custom_playback_state_on_ad_break_complete(
            settings.restore_custom_playback_state_on_ad_break_complete,
        );
        let inner = self
            .event
            .get_ads_manager(&video, &rendering)
            .map_err(|e| AdError::Manager(js_message(&e)))?;
        Ok(ImaManager {
            inner,
            dispatcher: self.dispatcher,
        })
    }
}

/// [`AdsManager`] over a `google.ima.AdsManager`.
pub(crate) struct ImaManager {
    inner: bindings::AdsManager,
    dispatcher: Dispatcher,
}

impl core::fmt::Debug for ImaManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImaManager").finish_non_exhaustive()
    }
}

impl AdsManager for ImaManager {
    fn subscribe_errors(&mut self) {
        let dispatcher = self.dispatcher.clone();
        let on_error = Closure::wrap(Box::new(move |event: bindings::AdErrorEvent| {
            dispatcher.send(Message::AdError(AdError::Manager(describe(&event))));
        }) as Box<dyn FnMut(bindings::AdErrorEvent)>);
        self.inner
            .add_event_listener(AD_ERROR, on_error.as_ref().unchecked_ref());
        on_error.forget();
    }

    fn subscribe(&mut self, kinds: &[AdEventKind]) {
        for &kind in kinds {
            let dispatcher = self.dispatcher.clone();
            let listener = Closure::wrap(Box::new(move |event: bindings::AdEvent| {
                let ad = event.get_ad().map(|ad| AdDescriptor {
                    linear: ad.is_linear(),
                });
                dispatcher.send(Message::AdEvent(AdEvent { kind, ad }));
            }) as Box<dyn FnMut(bindings::AdEvent)>);
            self.inner
                .add_event_listener(ima_event_type(kind), listener.as_ref().unchecked_ref());
            listener.forget();
        }
    }

    fn init(&mut self, width: u32, height: u32, view_mode: ViewMode) -> Result<(), AdError> {
        self.inner
            .init(f64::from(width), f64::from(height), view_mode.as_str())
            .map_err(|e| AdError::Start(js_message(&e)))
    }

    fn start(&mut self) -> Result<(), AdError> {
        self.inner
            .start()
            .map_err(|e| AdError::Start(js_message(&e)))
    }

    fn resume(&mut self) {
        self.inner.resume();
    }

    fn destroy(&mut self) {
        if let Err(e) = self.inner.destroy() {
            log::debug!("preroll: ads manager destroy threw: {}", js_message(&e));
        }
    }

    fn remaining_time(&self) -> f64 {
        self.inner.get_remaining_time()
    }
}
