//! crates/logging/src/severity.rs
//! Severity enumeration and per-severity emission metadata.

use std::fmt;

use logging_sink::{RgbColor, SinkMethod};

/// Ordered gating level; a higher value is more urgent, a lower value more
/// verbose.
///
/// The numeric ordering drives threshold comparison: a call at severity `S`
/// passes the gate iff `S >= threshold`. [`Severity::Silence`] is a sentinel
/// threshold value that suppresses all output; it is never a callable
/// severity and carries no emission metadata.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Most verbose diagnostics.
    Trace = 0,
    /// Ordinary informational output.
    Info = 1,
    /// Conditions worth attention.
    Warn = 2,
    /// Failures.
    Error = 3,
    /// Sentinel threshold that suppresses everything.
    Silence = 4,
}

/// Emission metadata for one callable severity.
///
/// Replaces the parallel lookup tables of method name, display name, and
/// header color with a single record per severity, so no out-of-range index
/// can reach a table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SeverityStyle {
    /// Console method that carries marker lines for this severity.
    pub method: SinkMethod,
    /// Human-readable severity name. Not emitted; kept for diagnostics.
    pub name: &'static str,
    /// Header background color.
    pub background: RgbColor,
    /// Whether a call-chain marker line follows the payload.
    pub call_chain: bool,
}

impl Severity {
    /// Returns the emission metadata, or `None` for [`Severity::Silence`].
    #[must_use]
    pub const fn style(self) -> Option<SeverityStyle> {
        match self {
            Self::Trace => Some(SeverityStyle {
                method: SinkMethod::Trace,
                name: "trace",
                background: RgbColor(0xcc, 0xbb, 0xdd),
                call_chain: true,
            }),
            Self::Info => Some(SeverityStyle {
                method: SinkMethod::Log,
                name: "info",
                background: RgbColor(0xaa, 0xff, 0xaa),
                call_chain: false,
            }),
            Self::Warn => Some(SeverityStyle {
                method: SinkMethod::Warn,
                name: "warning",
                background: RgbColor(0xff, 0xff, 0x55),
                call_chain: true,
            }),
            Self::Error => Some(SeverityStyle {
                method: SinkMethod::Error,
                name: "error",
                background: RgbColor(0xff, 0x88, 0x88),
                call_chain: true,
            }),
            Self::Silence => None,
        }
    }

    /// Decodes the `repr` byte written by the threshold cell.
    pub(crate) const fn from_repr(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Trace),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            4 => Some(Self::Silence),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.style().map_or("silence", |style| style.name);
        f.write_str(name)
    }
}
