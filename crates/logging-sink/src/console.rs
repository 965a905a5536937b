//! crates/logging-sink/src/console.rs
//! ANSI terminal renderer for grouped diagnostics.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::io::{self, Write};

use anstyle::{AnsiColor, Color, RgbColor, Style};
use is_terminal::IsTerminal;

use crate::{GroupHeader, GroupMode, GroupSink, SinkMethod};

/// Background color for the timestamp segment of every header.
const TIMESTAMP_BACKGROUND: RgbColor = RgbColor(0xff, 0xff, 0xbb);

/// Expander glyphs rendered before group headers.
mod glyphs {
    pub const COLLAPSED: &str = "\u{25b8}";
    pub const EXPANDED: &str = "\u{25be}";
}

/// Renders groups as indented blocks on a console-like writer.
///
/// A terminal has no native collapsible sections, so the sink renders the
/// closest line-oriented equivalent: the header line carries an expander
/// glyph reflecting the requested [`GroupMode`], and every line inside the
/// group is indented by two spaces per open group. Lines emitted through
/// [`SinkMethod::Trace`], [`SinkMethod::Warn`], or [`SinkMethod::Error`] are
/// followed by the frames of [`Backtrace::capture`] whenever backtraces are
/// enabled for the process, matching consoles that append a stack trace to
/// those methods.
///
/// Write errors are discarded: the sink fails silently exactly as a console
/// would.
///
/// # Examples
///
/// ```
/// use logging_sink::{ConsoleSink, GroupHeader, GroupMode, GroupSink, RgbColor};
///
/// let mut sink = ConsoleSink::new(Vec::new());
/// let header = GroupHeader::new("@alert", "12:30:5.250", RgbColor(0xff, 0xff, 0x55));
///
/// sink.begin_group(&header, GroupMode::Expanded);
/// sink.log_value(&"disk nearly full");
/// sink.end_group();
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.starts_with("\u{25be} @alert 12:30:5.250\n"));
/// assert!(output.contains("  \"disk nearly full\"\n"));
/// ```
#[derive(Clone, Debug)]
pub struct ConsoleSink<W> {
    writer: W,
    use_color: bool,
    depth: usize,
}

impl<W> ConsoleSink<W> {
    /// Creates a sink without color, suitable for buffers and pipes.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self::with_color(writer, false)
    }

    /// Creates a sink with an explicit color choice.
    #[must_use]
    pub const fn with_color(writer: W, use_color: bool) -> Self {
        Self {
            writer,
            use_color,
            depth: 0,
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }

    fn style(&self, style: Style) -> Style {
        if self.use_color { style } else { Style::new() }
    }
}

impl ConsoleSink<io::Stdout> {
    /// Creates a sink over standard output, with color iff it is a terminal.
    #[must_use]
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        let use_color = stdout.is_terminal();
        Self::with_color(stdout, use_color)
    }
}

impl ConsoleSink<io::Stderr> {
    /// Creates a sink over standard error, with color iff it is a terminal.
    #[must_use]
    pub fn stderr() -> Self {
        let stderr = io::stderr();
        let use_color = stderr.is_terminal();
        Self::with_color(stderr, use_color)
    }
}

/// Foreground style a console applies to lines of the given method.
fn method_style(method: SinkMethod) -> Style {
    match method {
        SinkMethod::Trace => Style::new().dimmed(),
        SinkMethod::Log => Style::new(),
        SinkMethod::Warn => Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
        SinkMethod::Error => Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))),
    }
}

impl<W: Write> GroupSink for ConsoleSink<W> {
    fn begin_group(&mut self, header: &GroupHeader, mode: GroupMode) {
        let glyph = if mode.is_expanded() {
            glyphs::EXPANDED
        } else {
            glyphs::COLLAPSED
        };
        let label_style = self.style(
            Style::new()
                .bold()
                .bg_color(Some(Color::Rgb(header.background))),
        );
        let timestamp_style = self.style(
            Style::new()
                .bold()
                .bg_color(Some(Color::Rgb(TIMESTAMP_BACKGROUND))),
        );
        let _ = writeln!(
            self.writer,
            "{}{glyph} {}{}{} {}{}{}",
            self.indent(),
            label_style.render(),
            header.label,
            label_style.render_reset(),
            timestamp_style.render(),
            header.timestamp,
            timestamp_style.render_reset(),
        );
        self.depth += 1;
    }

    fn log_value(&mut self, value: &dyn fmt::Debug) {
        let _ = writeln!(self.writer, "{}{value:?}", self.indent());
    }

    fn emit(&mut self, method: SinkMethod, text: &str) {
        let style = self.style(method_style(method));
        let _ = writeln!(
            self.writer,
            "{}{}{text}{}",
            self.indent(),
            style.render(),
            style.render_reset(),
        );
        if method.carries_backtrace() {
            let backtrace = Backtrace::capture();
            if matches!(backtrace.status(), BacktraceStatus::Captured) {
                let indent = self.indent();
                for line in backtrace.to_string().lines() {
                    let _ = writeln!(self.writer, "{indent}{line}");
                }
            }
        }
    }

    fn end_group(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_sink() -> ConsoleSink<Vec<u8>> {
        ConsoleSink::new(Vec::new())
    }

    fn output(sink: ConsoleSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).expect("utf-8 output")
    }

    fn header(label: &str) -> GroupHeader {
        GroupHeader::new(label, "1:2:3.4", RgbColor(0xcc, 0xbb, 0xdd))
    }

    #[test]
    fn collapsed_group_renders_collapsed_glyph() {
        let mut sink = plain_sink();
        sink.begin_group(&header("plain"), GroupMode::Collapsed);
        sink.end_group();

        assert_eq!(output(sink), "\u{25b8} plain 1:2:3.4\n");
    }

    #[test]
    fn expanded_group_renders_expanded_glyph() {
        let mut sink = plain_sink();
        sink.begin_group(&header("@x"), GroupMode::Expanded);
        sink.end_group();

        assert_eq!(output(sink), "\u{25be} @x 1:2:3.4\n");
    }

    #[test]
    fn payload_lines_are_indented_inside_the_group() {
        let mut sink = plain_sink();
        sink.begin_group(&header("g"), GroupMode::Collapsed);
        sink.log_value(&1);
        sink.log_value(&vec![1, 2]);
        sink.end_group();

        let out = output(sink);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("\u{25b8} g 1:2:3.4"));
        assert_eq!(lines.next(), Some("  1"));
        assert_eq!(lines.next(), Some("  [1, 2]"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn nested_groups_deepen_indentation() {
        let mut sink = plain_sink();
        sink.begin_group(&header("outer"), GroupMode::Expanded);
        sink.begin_group(&header("inner"), GroupMode::Expanded);
        sink.log_value(&"deep");
        sink.end_group();
        sink.log_value(&"shallow");
        sink.end_group();

        let out = output(sink);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("\u{25be} outer 1:2:3.4"));
        assert_eq!(lines.next(), Some("  \u{25be} inner 1:2:3.4"));
        assert_eq!(lines.next(), Some("    \"deep\""));
        assert_eq!(lines.next(), Some("  \"shallow\""));
    }

    #[test]
    fn emit_writes_marker_text_on_its_own_line() {
        let mut sink = plain_sink();
        sink.begin_group(&header("g"), GroupMode::Collapsed);
        sink.emit(SinkMethod::Warn, "call-chain backtrace");
        sink.end_group();

        let out = output(sink);
        assert!(out.contains("  call-chain backtrace\n"));
    }

    #[test]
    fn end_group_below_zero_depth_is_harmless() {
        let mut sink = plain_sink();
        sink.end_group();
        sink.log_value(&"top");

        assert_eq!(output(sink), "\"top\"\n");
    }

    #[test]
    fn colored_header_wraps_segments_in_escape_sequences() {
        let mut sink = ConsoleSink::with_color(Vec::new(), true);
        sink.begin_group(&header("g"), GroupMode::Collapsed);
        sink.end_group();

        let out = output(sink);
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("g"));
    }

    #[test]
    fn plain_sink_emits_no_escape_sequences() {
        let mut sink = plain_sink();
        sink.begin_group(&header("g"), GroupMode::Collapsed);
        sink.log_value(&42);
        sink.emit(SinkMethod::Error, "call-chain backtrace");
        sink.end_group();

        assert!(!output(sink).contains('\u{1b}'));
    }
}
