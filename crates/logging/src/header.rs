//! crates/logging/src/header.rs
//! Styled group-header construction.

use chrono::{Local, Timelike};
use logging_sink::GroupHeader;

use crate::severity::SeverityStyle;

/// Builds the header for one emitted group: the raw label, the wall-clock
/// timestamp at call time, and the severity's background color.
pub(crate) fn build(label: &str, style: &SeverityStyle) -> GroupHeader {
    GroupHeader::new(label, short_time(), style.background)
}

/// Short wall-clock timestamp for the current local time.
fn short_time() -> String {
    let now = Local::now();
    format_short_time(
        now.hour(),
        now.minute(),
        now.second(),
        now.timestamp_subsec_millis(),
    )
}

/// `H:M:S.mmm` with no zero padding, e.g. `9:5:3.7`.
fn format_short_time(hours: u32, minutes: u32, seconds: u32, millis: u32) -> String {
    format!("{hours}:{minutes}:{seconds}.{millis}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    #[test]
    fn short_time_components_are_not_zero_padded() {
        assert_eq!(format_short_time(9, 5, 3, 7), "9:5:3.7");
        assert_eq!(format_short_time(23, 59, 59, 999), "23:59:59.999");
        assert_eq!(format_short_time(0, 0, 0, 0), "0:0:0.0");
    }

    #[test]
    fn build_carries_label_and_severity_background() {
        let style = Severity::Error.style().expect("error has a style");
        let header = build("@boom", &style);

        assert_eq!(header.label, "@boom");
        assert_eq!(header.background, style.background);
    }

    #[test]
    fn build_timestamp_has_clock_shape() {
        let style = Severity::Info.style().expect("info has a style");
        let header = build("t", &style);

        let (clock, millis) = header
            .timestamp
            .split_once('.')
            .expect("timestamp has a millisecond part");
        let parts: Vec<&str> = clock.split(':').collect();
        assert_eq!(parts.len(), 3);
        for part in parts {
            part.parse::<u32>().expect("clock component is numeric");
        }
        millis.parse::<u32>().expect("millisecond part is numeric");
    }
}
