// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, recording and JSON export for preroll session traces.
//!
//! This crate provides [`SessionSink`](preroll_core::trace::SessionSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: one human-readable line per event.
//! - [`recorder::RecorderSink`]: keeps every event in memory, in order.
//! - [`json::export`]: writes recorded events as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;

#[cfg(test)]
mod fixture;
