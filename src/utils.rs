// src/utils.rs

use chrono::{DateTime, Local};

/// Strips control and escape characters from untrusted text so it reaches the
/// terminal as literal visible characters. Newlines and tabs survive.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Formats a timestamp the way the transcript displays it: 12-hour clock,
/// hour and minute.
pub fn format_clock(timestamp: DateTime<Local>) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sanitize_passes_plain_text_through() {
        assert_eq!(sanitize("hello there"), "hello there");
    }

    #[test]
    fn sanitize_keeps_markup_as_literal_text() {
        assert_eq!(
            sanitize("<script>alert(1)</script>"),
            "<script>alert(1)</script>"
        );
    }

    #[test]
    fn sanitize_strips_escape_sequences() {
        let cleaned = sanitize("\x1b[31mred\x1b[0m");
        assert!(!cleaned.contains('\x1b'));
        assert!(cleaned.contains("red"));
    }

    #[test]
    fn sanitize_keeps_newlines_and_tabs() {
        assert_eq!(sanitize("a\nb\tc"), "a\nb\tc");
    }

    #[test]
    fn format_clock_uses_twelve_hour_clock() {
        let afternoon = Local.with_ymd_and_hms(2024, 6, 1, 14, 5, 0).unwrap();
        assert_eq!(format_clock(afternoon), "2:05 PM");
        let morning = Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        assert_eq!(format_clock(morning), "9:30 AM");
    }
}
