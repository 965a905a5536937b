//! crates/logging/src/logger.rs
//! The level gate and group formatter.

use std::fmt;

use logging_sink::{GroupMode, GroupSink};

use crate::header;
use crate::severity::Severity;
use crate::threshold;

/// Severity gate and group formatter over an owned sink.
///
/// All four severity entry points funnel through one emission routine: the
/// call is checked against the process-wide threshold, a styled header is
/// built, the group is opened in the mode selected by the label convention,
/// each payload element is emitted in order, severities in the call-chain set
/// append one marker line, and the group is closed.
///
/// The logger holds no state beyond the sink; the threshold lives in the
/// process-wide cell shared with the [`crate::set_level`] facade.
///
/// # Examples
///
/// ```
/// use logging::{GroupLogger, RecordingSink, Severity, SinkEvent};
///
/// logging::set_level(Severity::Trace);
/// let mut logger = GroupLogger::new(RecordingSink::new());
/// logger.info("plain", &[&1, &2]);
///
/// let events = logger.into_inner().take_events();
/// assert_eq!(events.len(), 4); // begin, two values, end
/// assert_eq!(events[1], SinkEvent::Value("1".to_owned()));
/// ```
#[derive(Clone, Debug)]
pub struct GroupLogger<S> {
    sink: S,
}

impl<S> GroupLogger<S> {
    /// Creates a logger over `sink`.
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Borrows the underlying sink.
    #[must_use]
    pub const fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the underlying sink.
    pub const fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consumes the logger and returns the sink.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.sink
    }
}

/// Marker text for the extra line appended after the payload for severities
/// in the call-chain set. Consoles append a stack trace of their own to the
/// methods that carry it.
const CALL_CHAIN_MARKER: &str = "call-chain backtrace";

/// Selects the grouping mode from the raw label: empty labels and labels
/// containing `@` anywhere open pre-expanded, everything else collapsed.
fn group_mode(label: &str) -> GroupMode {
    if label.is_empty() || label.contains('@') {
        GroupMode::Expanded
    } else {
        GroupMode::Collapsed
    }
}

impl<S: GroupSink> GroupLogger<S> {
    /// Emits a trace-severity group.
    pub fn trace(&mut self, label: &str, payload: &[&dyn fmt::Debug]) {
        self.apply_group(Severity::Trace, label, payload);
    }

    /// Emits an info-severity group.
    pub fn info(&mut self, label: &str, payload: &[&dyn fmt::Debug]) {
        self.apply_group(Severity::Info, label, payload);
    }

    /// Emits a warn-severity group.
    pub fn warn(&mut self, label: &str, payload: &[&dyn fmt::Debug]) {
        self.apply_group(Severity::Warn, label, payload);
    }

    /// Emits an error-severity group.
    pub fn error(&mut self, label: &str, payload: &[&dyn fmt::Debug]) {
        self.apply_group(Severity::Error, label, payload);
    }

    /// The shared emission routine.
    fn apply_group(&mut self, severity: Severity, label: &str, payload: &[&dyn fmt::Debug]) {
        if !threshold::enabled(severity) {
            return;
        }
        // `Silence` carries no style; a severity without one never emits.
        let Some(style) = severity.style() else {
            return;
        };

        self.sink.begin_group(&header::build(label, &style), group_mode(label));
        for value in payload {
            self.sink.log_value(*value);
        }
        if style.call_chain {
            self.sink.emit(style.method, CALL_CHAIN_MARKER);
        }
        self.sink.end_group();
    }
}
