// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structured session diagnostics.
//!
//! The orchestrator reports what it does to a [`SessionSink`]. All methods
//! default to no-ops, so implementing only the events you care about is fine.
//! Every event carries a per-session sequence number so recorded traces can be
//! replayed in order.
//!
//! Plain-text logging goes through the `log` facade independently of the sink.

use crate::capability::TimerId;
use crate::error::AdError;
use crate::event::AdEvent;
use crate::state::{Input, PlaybackState};

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the playback state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionEvent {
    /// Sequence number within the session.
    pub seq: u64,
    /// State before the transition.
    pub from: PlaybackState,
    /// State after the transition.
    pub to: PlaybackState,
    /// What caused it.
    pub input: Input,
}

/// Emitted for every ad lifecycle event the orchestrator receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdEventRecord {
    /// Sequence number within the session.
    pub seq: u64,
    /// State when the event arrived.
    pub state: PlaybackState,
    /// The event.
    pub event: AdEvent,
}

/// Emitted for every ad error handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdErrorRecord {
    /// Sequence number within the session.
    pub seq: u64,
    /// State when the error arrived.
    pub state: PlaybackState,
    /// The error.
    pub error: AdError,
}

/// What happened to the poll timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// The timer was started.
    Armed,
    /// The timer was stopped.
    Cleared,
}

/// Emitted when the poll timer is armed or cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerEvent {
    /// Sequence number within the session.
    pub seq: u64,
    /// Armed or cleared.
    pub action: TimerAction,
    /// Which timer.
    pub id: TimerId,
}

/// Emitted when the ad surface is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetachEvent {
    /// Sequence number within the session.
    pub seq: u64,
    /// `false` if the page reported the surface as already detached.
    pub was_attached: bool,
}

// ---------------------------------------------------------------------------
// SessionSink trait
// ---------------------------------------------------------------------------

/// Receives structured events from the orchestrator.
pub trait SessionSink {
    /// Called when the playback state changes.
    fn on_transition(&mut self, e: &TransitionEvent) {
        _ = e;
    }

    /// Called for every ad lifecycle event received.
    fn on_ad_event(&mut self, e: &AdEventRecord) {
        _ = e;
    }

    /// Called for every ad error handled.
    fn on_ad_error(&mut self, e: &AdErrorRecord) {
        _ = e;
    }

    /// Called when the poll timer is armed or cleared.
    fn on_timer(&mut self, e: &TimerEvent) {
        _ = e;
    }

    /// Called when the ad surface is removed.
    fn on_surface_detached(&mut self, e: &DetachEvent) {
        _ = e;
    }
}

/// A [`SessionSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl SessionSink for NoopSink {}

impl<S: SessionSink + ?Sized> SessionSink for &mut S {
    fn on_transition(&mut self, e: &TransitionEvent) {
        (**self).on_transition(e);
    }

    fn on_ad_event(&mut self, e: &AdEventRecord) {
        (**self).on_ad_event(e);
    }

    fn on_ad_error(&mut self, e: &AdErrorRecord) {
        (**self).on_ad_error(e);
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        (**self).on_timer(e);
    }

    fn on_surface_detached(&mut self, e: &DetachEvent) {
        (**self).on_surface_detached(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AdEventKind;
    use alloc::vec::Vec;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_transition(&TransitionEvent {
            seq: 0,
            from: PlaybackState::Idle,
            to: PlaybackState::AdRequested,
            input: Input::RequestSubmitted,
        });
        sink.on_ad_event(&AdEventRecord {
            seq: 1,
            state: PlaybackState::AdLoaded,
            event: AdEvent::linear(AdEventKind::Loaded),
        });
        sink.on_surface_detached(&DetachEvent {
            seq: 2,
            was_attached: true,
        });
    }

    #[test]
    fn mut_ref_forwards() {
        #[derive(Default)]
        struct Timers {
            seen: Vec<(TimerAction, TimerId)>,
        }
        impl SessionSink for Timers {
            fn on_timer(&mut self, e: &TimerEvent) {
                self.seen.push((e.action, e.id));
            }
        }

        fn emit(mut sink: impl SessionSink) {
            sink.on_timer(&TimerEvent {
                seq: 3,
                action: TimerAction::Armed,
                id: TimerId(9),
            });
        }

        let mut sink = Timers::default();
        emit(&mut sink);
        assert_eq!(sink.seen, &[(TimerAction::Armed, TimerId(9))]);
    }
}
