//! crates/logging-sink/src/recording.rs
//! In-memory sink that records the call sequence for tests.

use std::fmt;

use anstyle::RgbColor;

use crate::{GroupHeader, GroupMode, GroupSink, SinkMethod};

/// One recorded sink call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SinkEvent {
    /// A group was opened.
    GroupBegin {
        /// Raw label from the header.
        label: String,
        /// Timestamp from the header.
        timestamp: String,
        /// Label background from the header.
        background: RgbColor,
        /// Requested expansion mode.
        mode: GroupMode,
    },
    /// A payload line, captured via its `Debug` rendering.
    Value(String),
    /// A line routed through a specific console method.
    Emit {
        /// Console method the line was routed through.
        method: SinkMethod,
        /// Line text.
        text: String,
    },
    /// The innermost group was closed.
    GroupEnd,
}

/// Sink that appends every call to an event list.
///
/// Tests drive the facade against a `RecordingSink` and assert on the exact
/// event sequence: group topology, payload order, and marker placement are
/// all visible without parsing rendered text.
///
/// # Examples
///
/// ```
/// use logging_sink::{GroupHeader, GroupMode, GroupSink, RecordingSink, RgbColor, SinkEvent};
///
/// let mut sink = RecordingSink::new();
/// let header = GroupHeader::new("g", "1:2:3.4", RgbColor(0, 0, 0));
/// sink.begin_group(&header, GroupMode::Collapsed);
/// sink.log_value(&7);
/// sink.end_group();
///
/// assert_eq!(sink.events().len(), 3);
/// assert_eq!(sink.events()[1], SinkEvent::Value("7".to_owned()));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events in call order.
    #[must_use]
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Returns the recorded events, clearing the sink.
    pub fn take_events(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reports whether no call has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GroupSink for RecordingSink {
    fn begin_group(&mut self, header: &GroupHeader, mode: GroupMode) {
        self.events.push(SinkEvent::GroupBegin {
            label: header.label.clone(),
            timestamp: header.timestamp.clone(),
            background: header.background,
            mode,
        });
    }

    fn log_value(&mut self, value: &dyn fmt::Debug) {
        self.events.push(SinkEvent::Value(format!("{value:?}")));
    }

    fn emit(&mut self, method: SinkMethod, text: &str) {
        self.events.push(SinkEvent::Emit {
            method,
            text: text.to_owned(),
        });
    }

    fn end_group(&mut self) {
        self.events.push(SinkEvent::GroupEnd);
    }
}
