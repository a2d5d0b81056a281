// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded session traces.
//!
//! [`export`] writes events recorded by a
//! [`RecorderSink`](crate::recorder::RecorderSink) as a JSON array, one
//! object per event, each tagged with `"type"` and `"seq"`.

use std::io::{self, Write};

use serde_json::{Value, json};

use preroll_core::trace::TimerAction;

use crate::recorder::SessionRecord;

/// Converts one record to a JSON object.
#[must_use]
pub fn to_value(record: &SessionRecord) -> Value {
    match record {
        SessionRecord::Transition(e) => json!({
            "type": "transition",
            "seq": e.seq,
            "from": e.from.as_str(),
            "to": e.to.as_str(),
            "input": e.input.as_str(),
        }),
        SessionRecord::AdEvent(e) => json!({
            "type": "ad_event",
            "seq": e.seq,
            "state": e.state.as_str(),
            "kind": e.event.kind.as_str(),
            "linear": e.event.ad.map(|ad| ad.linear),
        }),
        SessionRecord::AdError(e) => json!({
            "type": "ad_error",
            "seq": e.seq,
            "state": e.state.as_str(),
            "message": e.error.to_string(),
        }),
        SessionRecord::Timer(e) => {
            let action = match e.action {
                TimerAction::Armed => "armed",
                TimerAction::Cleared => "cleared",
            };
            json!({
                "type": "timer",
                "seq": e.seq,
                "action": action,
                "id": e.id.0,
            })
        }
        SessionRecord::SurfaceDetached(e) => json!({
            "type": "surface_detached",
            "seq": e.seq,
            "was_attached": e.was_attached,
        }),
    }
}

/// Writes `records` as a pretty-printed JSON array.
pub fn export(records: &[SessionRecord], writer: &mut dyn Write) -> io::Result<()> {
    let events: Vec<Value> = records.iter().map(to_value).collect();
    serde_json::to_writer_pretty(&mut *writer, &events)?;
    writeln!(writer)
}
