#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging-sink` defines the console-group vocabulary that the `logging`
//! facade drives: a [`GroupSink`] receives a styled [`GroupHeader`], a run of
//! payload lines, an optional per-method marker line, and a closing call. Two
//! implementations ship with the crate: [`ConsoleSink`], which renders groups
//! as indented ANSI-styled blocks on a terminal, and [`RecordingSink`], which
//! captures the call sequence as structured [`SinkEvent`]s for tests.
//!
//! # Design
//!
//! The sink is an opaque collaborator. The facade never inspects how a sink
//! renders a value; [`GroupSink::log_value`] hands each payload element over
//! as a [`fmt::Debug`](std::fmt::Debug) trait object and the sink decides how
//! composite values (vectors, maps, tuples) appear. Group nesting is the
//! sink's own bookkeeping: [`ConsoleSink`] keeps a depth counter and indents
//! nested lines, while [`RecordingSink`] preserves the raw begin/end events so
//! tests can assert on topology.
//!
//! # Invariants
//!
//! - Every [`GroupSink::begin_group`] is paired with a
//!   [`GroupSink::end_group`] by the calling facade; sinks may rely on
//!   balanced nesting.
//! - Sink methods are infallible at the trait level. [`ConsoleSink`] swallows
//!   I/O errors, failing silently exactly as a console would.
//!
//! # Examples
//!
//! Render a collapsed group without color into an in-memory buffer:
//!
//! ```
//! use logging_sink::{ConsoleSink, GroupHeader, GroupMode, GroupSink, RgbColor};
//!
//! let mut sink = ConsoleSink::new(Vec::new());
//! let header = GroupHeader::new("startup", "9:5:3.7", RgbColor(0xaa, 0xff, 0xaa));
//!
//! sink.begin_group(&header, GroupMode::Collapsed);
//! sink.log_value(&[1, 2, 3]);
//! sink.end_group();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "\u{25b8} startup 9:5:3.7\n  [1, 2, 3]\n");
//! ```

use std::fmt;

pub use anstyle::RgbColor;

mod console;
mod recording;

pub use console::ConsoleSink;
pub use recording::{RecordingSink, SinkEvent};

/// Underlying console method that carries a line of output.
///
/// Mirrors the four per-severity console primitives. `Trace`, `Warn`, and
/// `Error` are the methods a console augments with a stack trace of its own;
/// `Log` is the plain line primitive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SinkMethod {
    /// Trace-level line output.
    Trace,
    /// Plain line output.
    Log,
    /// Warning-level line output.
    Warn,
    /// Error-level line output.
    Error,
}

impl SinkMethod {
    /// Returns the console method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Log => "log",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Reports whether a console appends a stack trace to lines emitted
    /// through this method.
    #[must_use]
    pub const fn carries_backtrace(self) -> bool {
        !matches!(self, Self::Log)
    }
}

/// Whether a group starts pre-expanded or collapsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GroupMode {
    /// The group starts folded; the reader opens it on demand.
    Collapsed,
    /// The group starts open.
    Expanded,
}

impl GroupMode {
    /// Returns `true` for [`GroupMode::Expanded`].
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// Styled two-part header that opens a group.
///
/// The facade builds one header per emitted group: the raw label, a short
/// wall-clock timestamp captured at call time, and the background color the
/// label segment renders over. How the parts are styled is up to the sink;
/// [`ConsoleSink`] renders both segments bold, the label over `background`
/// and the timestamp over a fixed pale yellow.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GroupHeader {
    /// Raw group label, exactly as supplied by the caller.
    pub label: String,
    /// Short `H:M:S.mmm` timestamp, no zero padding.
    pub timestamp: String,
    /// Background color for the label segment.
    pub background: RgbColor,
}

impl GroupHeader {
    /// Creates a header from its parts.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        timestamp: impl Into<String>,
        background: RgbColor,
    ) -> Self {
        Self {
            label: label.into(),
            timestamp: timestamp.into(),
            background,
        }
    }
}

/// Console-like output target for grouped diagnostics.
///
/// Implementations receive a balanced sequence of calls per group:
/// `begin_group`, zero or more `log_value` lines, at most one `emit` marker
/// line, and a closing `end_group`.
pub trait GroupSink {
    /// Opens a group under `header`, pre-expanded or collapsed per `mode`.
    fn begin_group(&mut self, header: &GroupHeader, mode: GroupMode);

    /// Emits one payload line. Rendering of the value is sink-defined.
    fn log_value(&mut self, value: &dyn fmt::Debug);

    /// Emits one line through a specific console method.
    fn emit(&mut self, method: SinkMethod, text: &str);

    /// Closes the innermost open group.
    fn end_group(&mut self);
}
