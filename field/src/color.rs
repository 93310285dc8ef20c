//! Hex color parsing and normalization for position swatches and theme colors.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = hex_byte(&hex[0..1].repeat(2))?;
            let g = hex_byte(&hex[1..2].repeat(2))?;
            let b = hex_byte(&hex[2..3].repeat(2))?;
            Some((r, g, b))
        }
        6 => Some((hex_byte(&hex[0..2])?, hex_byte(&hex[2..4])?, hex_byte(&hex[4..6])?)),
        _ => None,
    }
}

fn hex_byte(pair: &str) -> Option<u8> {
    match u8::from_str_radix(pair, 16) {
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// Canonical lowercase `#rrggbb` for `value`, or `fallback` when `value` is
/// missing or unparseable. The fallback is returned as given.
#[must_use]
pub fn resolve_color(value: Option<&str>, fallback: &str) -> String {
    match value.and_then(parse_hex_rgb) {
        Some((r, g, b)) => format!("#{r:02x}{g:02x}{b:02x}"),
        None => fallback.to_string(),
    }
}

/// `#rrggbb` plus an alpha channel, as an `rgba()` CSS string.
///
/// Falls back to opaque black channels when `hex` does not parse.
#[must_use]
pub fn with_alpha(hex: &str, alpha: f64) -> String {
    let (r, g, b) = parse_hex_rgb(hex).unwrap_or((0, 0, 0));
    format!("rgba({r}, {g}, {b}, {:.2})", alpha.clamp(0.0, 1.0))
}
