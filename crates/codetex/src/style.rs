//! Foreground color extraction from inline `style` attributes.

use codetex_palette::Rgb;
use once_cell::sync::Lazy;
use regex::Regex;

static RGB_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^rgb\((?P<args>[^()]*)\)$").expect("valid regex"));

/// Which color notations are accepted from a `color` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSyntax {
    /// Only `rgb(r, g, b)` with integer channels
    #[default]
    Strict,
    /// Also `#rgb` and `#rrggbb`, which browsers serialize to `rgb()`
    Cssom,
}

/// Why a color value was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unsupported color notation: {0:?}")]
    Unsupported(String),

    #[error("expected 3 color channels, found {0}")]
    ChannelCount(usize),

    #[error("invalid color channel: {0:?}")]
    InvalidChannel(String),
}

/// Values of the `color` declarations in an inline style, in order.
///
/// Property names match case-insensitively and `!important` is dropped.
/// `background-color` and other properties are ignored.
pub fn color_declarations(style: &str) -> impl DoubleEndedIterator<Item = &str> {
    style
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .filter(|(property, _)| property.trim().eq_ignore_ascii_case("color"))
        .map(|(_, value)| strip_important(value.trim()))
}

/// Foreground color of an inline style.
///
/// Like a browser, the last `color` declaration that parses wins; invalid
/// declarations are skipped. `None` when there is no `color` declaration
/// at all, otherwise the last error when none of them parses.
pub fn style_color(style: &str, syntax: ColorSyntax) -> Option<Result<Rgb, ColorError>> {
    let mut last_error = None;
    for value in color_declarations(style).rev() {
        match parse_color(value, syntax) {
            Ok(rgb) => return Some(Ok(rgb)),
            Err(err) => {
                last_error.get_or_insert(err);
            }
        }
    }
    last_error.map(Err)
}

fn strip_important(value: &str) -> &str {
    let len = value.len();
    if len >= 10 && value.is_char_boundary(len - 10) && value[len - 10..].eq_ignore_ascii_case("!important") {
        value[..len - 10].trim_end()
    } else {
        value
    }
}

/// Parse a CSS color value into a triplet.
///
/// `rgb()` channels must be non-negative integers; whitespace around them
/// is free and values above 255 clamp to 255. Percentages, alpha, other
/// functions and named colors are rejected.
pub fn parse_color(value: &str, syntax: ColorSyntax) -> Result<Rgb, ColorError> {
    let value = value.trim();

    if syntax == ColorSyntax::Cssom && value.starts_with('#') {
        return Rgb::from_hex(value).ok_or_else(|| ColorError::Unsupported(value.to_string()));
    }

    let caps = RGB_FUNCTION
        .captures(value)
        .ok_or_else(|| ColorError::Unsupported(value.to_string()))?;

    let channels = caps["args"]
        .split(',')
        .map(parse_channel)
        .collect::<Result<Vec<_>, _>>()?;

    match channels[..] {
        [r, g, b] => Ok(Rgb::new(r, g, b)),
        _ => Err(ColorError::ChannelCount(channels.len())),
    }
}

fn parse_channel(raw: &str) -> Result<u8, ColorError> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColorError::InvalidChannel(digits.to_string()));
    }

    // All digits, so the only possible failure is overflow.
    let value = digits.parse::<u32>().unwrap_or(u32::MAX);
    Ok(value.min(255) as u8)
}
