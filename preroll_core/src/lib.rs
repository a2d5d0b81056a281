// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ad playback orchestration for a web video player.
//!
//! `preroll_core` holds the platform-independent half of a pre-roll ad
//! integration: it decides *when* to request, start, resume and tear down ads,
//! while the actual ad SDK, the page, and timers are reached through small
//! capability traits. It is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   Page click ──► Orchestrator::play_ads() ──► AdsManager::init/start
//!                        ▲                             │
//!                        │                             ▼
//!   AdSdk::request_ads ──┴─► on_ads_manager_loaded ──► on_ad_event / on_ad_error
//!                                                      │
//!                                                      ▼
//!                               PlaybackState::next() ──► remove_ad_ui()
//! ```
//!
//! **[`capability`]**: The [`AdSdk`](capability::AdSdk),
//! [`AdsManager`](capability::AdsManager), [`Page`](capability::Page) and
//! [`Timers`](capability::Timers) traits that backends implement.
//!
//! **[`orchestrator`]**: The [`Orchestrator`](orchestrator::Orchestrator)
//! that owns one playback [`Session`](session::Session) and reacts to user
//! clicks and SDK events.
//!
//! **[`state`]**: Explicit playback state set and transition table.
//!
//! **[`event`]**: Ad lifecycle events delivered by the SDK.
//!
//! **[`config`]**: Ad tag, slot sizes, selectors and timer policy.
//!
//! **[`error`]**: Error taxonomy for setup and ad failures.
//!
//! **[`trace`]**: [`SessionSink`](trace::SessionSink) trait for structured
//! session diagnostics.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod capability;
pub mod config;
pub mod error;
pub mod event;
pub mod orchestrator;
pub mod session;
pub mod state;
pub mod trace;

#[cfg(test)]
mod fake;
