//! Formatting utilities used for CLI outputs.

use ansi_term::Style;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str, enabled: bool) -> String {
    if enabled {
        Style::new().bold().paint(s).to_string()
    } else {
        s.to_string()
    }
}

/// Remove ANSI color sequences.
pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    re.replace_all(s, "").into_owned()
}

/// Width of `s` on screen, ignoring color codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad to `width` visible columns (color codes do not count).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Approximate human form of a day count, e.g. `1y 2m 5d`.
///
/// Uses 365-day years and 30-day months.
pub fn days2readable(days: i64) -> String {
    let sign = if days < 0 { "-" } else { "" };
    let d = days.abs();

    let years = d / 365;
    let months = (d % 365) / 30;
    let rest = (d % 365) % 30;

    match (years, months) {
        (0, 0) => format!("{sign}{rest}d"),
        (0, _) => format!("{sign}{months}m {rest}d"),
        _ => format!("{sign}{years}y {months}m {rest}d"),
    }
}
