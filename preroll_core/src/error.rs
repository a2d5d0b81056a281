// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy.
//!
//! Setup failures ([`MissingElement`]) are returned to the caller of
//! [`Orchestrator::init`](crate::orchestrator::Orchestrator::init). Ad
//! failures ([`AdError`]) never escape the orchestrator: every one of them ends
//! the ad session and hands the page back to plain content playback. None are
//! retried.

use alloc::string::String;

use crate::capability::UiRole;

/// A failure that ends the current ad session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AdError {
    /// The ad SDK is not present in this environment.
    #[error("ad SDK is not available")]
    CapabilityUnavailable,
    /// Playback was triggered before the SDK delivered an ads manager.
    #[error("no ads manager has been loaded")]
    ManagerNotLoaded,
    /// The ads loader reported an error (bad tag, empty response, timeout).
    #[error("ads loader error: {0}")]
    Loader(String),
    /// The ads manager reported an error during playback.
    #[error("ads manager error: {0}")]
    Manager(String),
    /// `init` or `start` on the ads manager failed synchronously, usually
    /// because of a malformed VAST response.
    #[error("ads manager failed to start: {0}")]
    Start(String),
}

/// A required player element could not be found on the page.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("required {role} element not found (selector `{selector}`)")]
pub struct MissingElement {
    /// Which element is missing.
    pub role: UiRole,
    /// The selector that matched nothing.
    pub selector: &'static str,
}
