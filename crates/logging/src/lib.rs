#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled console-logging facade. Each call names a label,
//! carries a variadic payload, and is gated by a process-wide minimum
//! severity; calls that pass the gate render as a styled, collapsible group:
//! a bold header over the severity's background color plus a short wall-clock
//! timestamp, one line per payload element, and — for severities in the
//! call-chain set — a trailing backtrace marker line.
//!
//! # Design
//!
//! The crate owns exactly one piece of mutable state, the current minimum
//! severity, stored in an atomic and manipulated through [`set_level`] and
//! [`level`]. The four severity entry points funnel through a single
//! emission routine on [`GroupLogger`], which drives any
//! [`GroupSink`] implementation; the module-level functions and the
//! [`trace!`], [`info!`], [`warn!`], and [`error!`] macros bind that routine
//! to a [`ConsoleSink`] over standard output.
//!
//! Groups open pre-expanded when the label is empty or contains `@` anywhere
//! in the raw string; every other label opens collapsed. The check is a
//! substring search, not a prefix check, and the label is never trimmed.
//!
//! # Invariants
//!
//! - The threshold starts at [`Severity::Trace`], the most verbose setting.
//! - A call at severity `S` emits iff the threshold is not
//!   [`Severity::Silence`] and `S >= threshold`; a gated call is a silent
//!   no-op.
//! - Payload order is preserved 1:1 into emitted lines, and a group that was
//!   opened is always closed.
//! - Only Trace, Warn, and Error append the call-chain marker; Info never
//!   does.
//!
//! # Errors
//!
//! Every operation is total: nothing validates, fails, or reports partial
//! success. Console write errors are swallowed at the sink boundary.
//!
//! # Examples
//!
//! ```
//! use logging::Severity;
//!
//! logging::set_level(Severity::Info);
//!
//! // Below the threshold: silent no-op.
//! logging::trace!("handshake", "hello");
//!
//! // Collapsed group with two payload lines.
//! logging::info!("transfer", 1024, "bytes");
//!
//! // `@` in the label opens the group pre-expanded.
//! logging::warn!("@alert", vec![1, 2, 3]);
//! ```
//!
//! Driving an explicit sink instead of the process console:
//!
//! ```
//! use logging::{GroupLogger, RecordingSink, Severity, SinkEvent};
//!
//! logging::set_level(Severity::Trace);
//! let mut logger = GroupLogger::new(RecordingSink::new());
//! logger.error("boom", &[&"cause"]);
//!
//! let events = logger.into_inner().take_events();
//! assert!(matches!(events.last(), Some(SinkEvent::GroupEnd)));
//! ```

use std::fmt;

mod header;
mod logger;
mod macros;
mod severity;
mod threshold;

pub use logger::GroupLogger;
pub use severity::{Severity, SeverityStyle};
pub use threshold::{is_full_open, is_silence, level, set_level};

pub use logging_sink::{
    ConsoleSink, GroupHeader, GroupMode, GroupSink, RecordingSink, RgbColor, SinkEvent, SinkMethod,
};

/// Emits a trace-severity group to standard output.
///
/// The [`trace!`] macro wraps this function with a variadic call shape.
pub fn trace(label: &str, payload: &[&dyn fmt::Debug]) {
    emit(Severity::Trace, label, payload);
}

/// Emits an info-severity group to standard output.
///
/// The [`info!`] macro wraps this function with a variadic call shape.
pub fn info(label: &str, payload: &[&dyn fmt::Debug]) {
    emit(Severity::Info, label, payload);
}

/// Emits a warn-severity group to standard output.
///
/// The [`warn!`] macro wraps this function with a variadic call shape.
pub fn warn(label: &str, payload: &[&dyn fmt::Debug]) {
    emit(Severity::Warn, label, payload);
}

/// Emits an error-severity group to standard output.
///
/// The [`error!`] macro wraps this function with a variadic call shape.
pub fn error(label: &str, payload: &[&dyn fmt::Debug]) {
    emit(Severity::Error, label, payload);
}

/// Early-gated dispatch to a console-backed logger. The gate is re-checked
/// inside the emission routine; this outer check skips sink construction for
/// calls that cannot pass.
fn emit(severity: Severity, label: &str, payload: &[&dyn fmt::Debug]) {
    if !threshold::enabled(severity) {
        return;
    }
    let mut logger = GroupLogger::new(ConsoleSink::stdout());
    match severity {
        Severity::Trace => logger.trace(label, payload),
        Severity::Info => logger.info(label, payload),
        Severity::Warn => logger.warn(label, payload),
        Severity::Error => logger.error(label, payload),
        Severity::Silence => {}
    }
}
