// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`SessionSink`] and keeps every event it sees
//! as a [`SessionRecord`], in the order the orchestrator emitted them.

use preroll_core::trace::{
    AdErrorRecord, AdEventRecord, DetachEvent, SessionSink, TimerEvent, TransitionEvent,
};

/// One recorded event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionRecord {
    /// A state change.
    Transition(TransitionEvent),
    /// An ad lifecycle event.
    AdEvent(AdEventRecord),
    /// An ad error.
    AdError(AdErrorRecord),
    /// The poll timer was armed or cleared.
    Timer(TimerEvent),
    /// The ad surface was removed.
    SurfaceDetached(DetachEvent),
}

impl SessionRecord {
    /// Sequence number of the event within its session.
    #[must_use]
    pub fn seq(&self) -> u64 {
        match self {
            Self::Transition(e) => e.seq,
            Self::AdEvent(e) => e.seq,
            Self::AdError(e) => e.seq,
            Self::Timer(e) => e.seq,
            Self::SurfaceDetached(e) => e.seq,
        }
    }
}

/// A [`SessionSink`] that stores every event.
#[derive(Debug, Default)]
pub struct RecorderSink {
    records: Vec<SessionRecord>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_records(self) -> Vec<SessionRecord> {
        self.records
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl SessionSink for RecorderSink {
    fn on_transition(&mut self, e: &TransitionEvent) {
        self.records.push(SessionRecord::Transition(*e));
    }

    fn on_ad_event(&mut self, e: &AdEventRecord) {
        self.records.push(SessionRecord::AdEvent(*e));
    }

    fn on_ad_error(&mut self, e: &AdErrorRecord) {
        self.records.push(SessionRecord::AdError(e.clone()));
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.records.push(SessionRecord::Timer(*e));
    }

    fn on_surface_detached(&mut self, e: &DetachEvent) {
        self.records.push(SessionRecord::SurfaceDetached(*e));
    }
}
