//! RGB triplets and their hex / HSL forms.

use std::fmt;

/// An 8-bit RGB triplet.
///
/// `Display` renders the canonical `r,g,b` form, which is also the text
/// written into `\definecolor{..}{RGB}{r,g,b}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color: `#rgb`, `rgb`, `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match digits.len() {
            3 => {
                let mut channels = digits.chars().map(|c| {
                    let v = c.to_digit(16).unwrap_or(0) as u8;
                    v * 17
                });
                Some(Self::new(channels.next()?, channels.next()?, channels.next()?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    /// Uppercase six-digit hex code without the leading `#`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// HSL components scaled to 0..255 and truncated.
    ///
    /// Hue is not wrapped, so reds with more blue than green get a small
    /// negative hue. The distance metric relies on this exact shape.
    pub(crate) fn hsl(&self) -> [i32; 3] {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;
        let l = (min + max) / 2.0;

        let mut s = 0.0;
        if l > 0.0 && l < 1.0 {
            s = delta / if l < 0.5 { 2.0 * l } else { 2.0 - 2.0 * l };
        }

        let mut h = 0.0;
        if delta > 0.0 {
            if max == r && max != g {
                h += (g - b) / delta;
            }
            if max == g && max != b {
                h += 2.0 + (b - r) / delta;
            }
            if max == b && max != r {
                h += 4.0 + (r - g) / delta;
            }
            h /= 6.0;
        }

        [(h * 255.0) as i32, (s * 255.0) as i32, (l * 255.0) as i32]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Hex code (`#RRGGBB`) for a triplet.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{}", Rgb::new(r, g, b).hex())
}
