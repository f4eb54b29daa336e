//! Formatting utilities

use chrono::{DateTime, SubsecRound, Utc};

// ANSI color codes
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const NC: &str = "\x1b[0m";

/// Current UTC time at second precision, the resolution the ledger records
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

/// Format a timestamp as ISO-8601 UTC, e.g. 2024-05-01T09:30:00Z
pub fn timestamp(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Check if stdout is a TTY and colors should be used
pub fn use_colors() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stdout())
}

/// Conditionally wrap text in a color code
pub fn color(code: &str, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", code, text, NC)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).unwrap();
        assert_eq!(timestamp(dt), "2024-05-01T09:30:05Z");
    }

    #[test]
    fn test_now_has_no_subseconds() {
        assert_eq!(chrono::Timelike::nanosecond(&now()), 0);
    }

    #[test]
    fn test_color_disabled() {
        assert_eq!(color(GREEN, "done", false), "done");
    }

    #[test]
    fn test_color_enabled() {
        let colored = color(GREEN, "done", true);
        assert!(colored.starts_with(GREEN));
        assert!(colored.ends_with(NC));
        assert!(colored.contains("done"));
    }
}
