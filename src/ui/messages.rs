//! User-facing status lines.
//!
//! Status goes to stderr so that serialized reports on stdout stay clean;
//! only headers and success lines of interactive commands go to stdout.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn icon(colour: Colour, icon: &str) -> String {
    colour.bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Colour::Red, ICON_ERR), msg);
}

/// Section header for table output
pub fn header<T: fmt::Display>(msg: T, colored: bool) {
    let line = format!("=== {msg} ===");
    if colored {
        let style = Style::new().fg(Colour::Blue).bold();
        println!("{}\n", style.paint(line));
    } else {
        println!("{line}\n");
    }
}
