//! Color helpers for terminal output.

use ansi_term::Colour;

/// Coverage color:
/// \>= 90% → green
/// \>= 75% → yellow
/// below → red
/// unknown → grey
pub fn color_for_pct(pct: Option<f64>) -> Colour {
    match pct {
        Some(v) if v >= 90.0 => Colour::Green,
        Some(v) if v >= 75.0 => Colour::Yellow,
        Some(_) => Colour::Red,
        None => Colour::Fixed(244),
    }
}

pub fn paint(value: &str, colour: Colour, enabled: bool) -> String {
    if enabled {
        colour.paint(value).to_string()
    } else {
        value.to_string()
    }
}

/// Gaps in red, overlaps in cyan.
pub fn color_for_kind(kind: &str) -> Colour {
    match kind {
        "gap" => Colour::Red,
        "overlap" => Colour::Cyan,
        _ => Colour::White,
    }
}
