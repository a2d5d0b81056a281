// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `google.ima` bindings.
//!
//! Only the surface the orchestrator drives is bound. Types without a
//! constructor are never created from Rust; they arrive as event payloads.

use alloc::string::String;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlVideoElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "ima", "settings"], js_name = "setLocale")]
    pub(crate) fn set_locale(locale: &str);

    // -- AdDisplayContainer ------------------------------------------------

    #[wasm_bindgen(js_namespace = ["google", "ima"])]
    pub(crate) type AdDisplayContainer;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "ima"], js_class = "AdDisplayContainer")]
    pub(crate) fn new(container: &HtmlElement) -> Result<AdDisplayContainer, JsValue>;

    #[wasm_bindgen(method)]
    pub(crate) fn initialize(this: &AdDisplayContainer);

    // -- AdsLoader ---------------------------------------------------------

    #[wasm_bindgen(js_namespace = ["google", "ima"])]
    pub(crate) type AdsLoader;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "ima"], js_class = "AdsLoader")]
    pub(crate) fn new(container: &AdDisplayContainer) -> Result<AdsLoader, JsValue>;

    #[wasm_bindgen(method, js_name = "addEventListener")]
    pub(crate) fn add_event_listener(
        this: &AdsLoader,
        kind: &str,
        listener: &js_sys::Function,
        use_capture: bool,
    );

    #[wasm_bindgen(method, catch, js_name = "requestAds")]
    pub(crate) fn request_ads(this: &AdsLoader, request: &AdsRequest) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = "contentComplete")]
    pub(crate) fn content_complete(this: &AdsLoader);

    // -- AdsRequest --------------------------------------------------------

    #[wasm_bindgen(js_namespace = ["google", "ima"])]
    pub(crate) type AdsRequest;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "ima"], js_class = "AdsRequest")]
    pub(crate) fn new() -> Result<AdsRequest, JsValue>;

    #[wasm_bindgen(method, setter = adTagUrl)]
    pub(crate) fn set_ad_tag_url(this: &AdsRequest, url: &str);

    #[wasm_bindgen(method, setter = linearAdSlotWidth)]
    pub(crate) fn set_linear_ad_slot_width(this: &AdsRequest, value: &JsValue);

    #[wasm_bindgen(method, setter = linearAdSlotHeight)]
    pub(crate) fn set_linear_ad_slot_height(this: &AdsRequest, value: &JsValue);

    #[wasm_bindgen(method, setter = nonLinearAdSlotWidth)]
    pub(crate) fn set_non_linear_ad_slot_width(this: &AdsRequest, value: &JsValue);

    #[wasm_bindgen(method, setter = nonLinearAdSlotHeight)]
    pub(crate) fn set_non_linear_ad_slot_height(this: &AdsRequest, value: &JsValue);

    // -- AdsRenderingSettings ----------------------------------------------

    #[wasm_bindgen(js_namespace = ["google", "ima"])]
    pub(crate) type AdsRenderingSettings;

    #[wasm_bindgen(constructor, catch, js_namespace = ["google", "ima"], js_class = "AdsRenderingSettings")]
    pub(crate) fn new() -> Result<AdsRenderingSettings, JsValue>;

    #[wasm_bindgen(method, setter = restoreCustomPlaybackStateOnAdBreakComplete)]
    pub(crate) fn set_restore_custom_playback_state_on_ad_break_complete(
        this: &AdsRenderingSettings,
        value: bool,
    );

    // -- AdsManagerLoadedEvent ---------------------------------------------

    pub(crate) type AdsManagerLoadedEvent;

    #[wasm_bindgen(method, catch, js_name = "getAdsManager")]
    pub(crate) fn get_ads_manager(
        this: &AdsManagerLoadedEvent,
        content: &HtmlVideoElement,
        settings: &AdsRenderingSettings,
    ) -> Result<AdsManager, JsValue>;

    // -- AdsManager --------------------------------------------------------

    pub(crate) type AdsManager;

    #[wasm_bindgen(method, js_name = "addEventListener")]
    pub(crate) fn add_event_listener(this: &AdsManager, kind: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, catch)]
    pub(crate) fn init(
        this: &AdsManager,
        width: f64,
        height: f64,
        view_mode: &str,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    pub(crate) fn start(this: &AdsManager) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub(crate) fn resume(this: &AdsManager);

    #[wasm_bindgen(method, catch)]
    pub(crate) fn destroy(this: &AdsManager) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = "getRemainingTime")]
    pub(crate) fn get_remaining_time(this: &AdsManager) -> f64;

    // -- Events ------------------------------------------------------------

    pub(crate) type AdEvent;

    #[wasm_bindgen(method, js_name = "getAd")]
    pub(crate) fn get_ad(this: &AdEvent) -> Option<Ad>;

    pub(crate) type Ad;

    #[wasm_bindgen(method, js_name = "isLinear")]
    pub(crate) fn is_linear(this: &Ad) -> bool;

    pub(crate) type AdErrorEvent;

    #[wasm_bindgen(method, js_name = "getError")]
    pub(crate) fn get_error(this: &AdErrorEvent) -> AdError;

    pub(crate) type AdError;

    #[wasm_bindgen(method, js_name = "getMessage")]
    pub(crate) fn get_message(this: &AdError) -> String;

    #[wasm_bindgen(method, js_name = "getErrorCode")]
    pub(crate) fn get_error_code(this: &AdError) -> i32;
}

/// Returns `true` if `window.google.ima` exists.
///
/// Probed once at startup: the SDK script may be blocked or fail to load,
/// in which case the page falls back to content-only playback.
pub(crate) fn ima_available() -> bool {
    let global = js_sys::global();
    let Ok(google) = js_sys::Reflect::get(&global, &JsValue::from_str("google")) else {
        return false;
    };
    if google.is_undefined() || google.is_null() {
        return false;
    }
    js_sys::Reflect::get(&google, &JsValue::from_str("ima"))
        .is_ok_and(|ima| !ima.is_undefined() && !ima.is_null())
}
