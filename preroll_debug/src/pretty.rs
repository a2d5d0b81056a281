// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`SessionSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use preroll_core::event::AdEvent;
use preroll_core::trace::{
    AdErrorRecord, AdEventRecord, DetachEvent, SessionSink, TimerAction, TimerEvent,
    TransitionEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn ad_shape(event: &AdEvent) -> &'static str {
    match event.ad {
        Some(ad) if ad.linear => "linear",
        Some(_) => "non-linear",
        None => "-",
    }
}

impl<W: Write> SessionSink for PrettyPrintSink<W> {
    fn on_transition(&mut self, e: &TransitionEvent) {
        let _ = writeln!(
            self.writer,
            "[state] #{} {} -> {} on {}",
            e.seq,
            e.from.as_str(),
            e.to.as_str(),
            e.input.as_str(),
        );
    }

    fn on_ad_event(&mut self, e: &AdEventRecord) {
        let _ = writeln!(
            self.writer,
            "[ad] #{} {} ad={} while {}",
            e.seq,
            e.event.kind.as_str(),
            ad_shape(&e.event),
            e.state.as_str(),
        );
    }

    fn on_ad_error(&mut self, e: &AdErrorRecord) {
        let _ = writeln!(
            self.writer,
            "[error] #{} {} while {}",
            e.seq,
            e.error,
            e.state.as_str(),
        );
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        let action = match e.action {
            TimerAction::Armed => "armed",
            TimerAction::Cleared => "cleared",
        };
        let _ = writeln!(self.writer, "[timer] #{} {action} id={}", e.seq, e.id.0);
    }

    fn on_surface_detached(&mut self, e: &DetachEvent) {
        let note = if e.was_attached {
            "removed"
        } else {
            "already gone"
        };
        let _ = writeln!(self.writer, "[surface] #{} {note}", e.seq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use preroll_core::capability::TimerId;
    use preroll_core::error::AdError;
    use preroll_core::event::AdEventKind;
    use preroll_core::state::{Input, PlaybackState};

    use crate::fixture::linear_session;

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_writer()).unwrap()
    }

    #[test]
    fn pretty_print_transition() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_transition(&TransitionEvent {
            seq: 4,
            from: PlaybackState::AdLoaded,
            to: PlaybackState::AdPlaying,
            input: Input::Started,
        });
        let output = output(sink);
        assert_eq!(output, "[state] #4 ad-loaded -> ad-playing on started\n");
    }

    #[test]
    fn pretty_print_ad_event_shapes() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_ad_event(&AdEventRecord {
            seq: 0,
            state: PlaybackState::AdRequested,
            event: AdEvent::non_linear(AdEventKind::Loaded),
        });
        sink.on_ad_event(&AdEventRecord {
            seq: 1,
            state: PlaybackState::Terminated,
            event: AdEvent::bare(AdEventKind::ContentResumeRequested),
        });
        let output = output(sink);
        assert!(output.contains("loaded ad=non-linear"), "got: {output}");
        assert!(
            output.contains("content-resume-requested ad=- while terminated"),
            "got: {output}"
        );
    }

    #[test]
    fn pretty_print_error_timer_and_surface() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_ad_error(&AdErrorRecord {
            seq: 2,
            state: PlaybackState::AdLoaded,
            error: AdError::Start("bad VAST".into()),
        });
        sink.on_timer(&TimerEvent {
            seq: 3,
            action: TimerAction::Cleared,
            id: TimerId(7),
        });
        sink.on_surface_detached(&DetachEvent {
            seq: 4,
            was_attached: false,
        });
        let lines: Vec<String> = output(sink).lines().map(String::from).collect();
        assert_eq!(
            lines,
            [
                "[error] #2 ads manager failed to start: bad VAST while ad-loaded",
                "[timer] #3 cleared id=7",
                "[surface] #4 already gone",
            ]
        );
    }

    #[test]
    fn pretty_print_live_session() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        linear_session(&mut sink);
        let output = output(sink);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 9, "got: {output}");
        assert_eq!(lines[0], "[state] #0 idle -> ad-requested on request-submitted");
        assert_eq!(lines[4], "[timer] #4 armed id=1");
        assert_eq!(lines[8], "[surface] #8 removed");
    }
}
