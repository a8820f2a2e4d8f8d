//! Nearest-color lookup.

use once_cell::sync::Lazy;

use crate::rgb::Rgb;
use crate::table::PALETTE;

/// HSL of every palette entry, computed once.
static PALETTE_HSL: Lazy<Vec<[i32; 3]>> =
    Lazy::new(|| PALETTE.iter().map(|(rgb, _)| rgb.hsl()).collect());

/// Result of a palette lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMatch {
    /// The palette entry's own color (not the queried one)
    pub rgb: Rgb,
    /// Display name, may contain spaces
    pub name: &'static str,
    /// Whether the queried color is exactly a palette color
    pub exact: bool,
}

impl ColorMatch {
    /// The display name with all whitespace removed.
    pub fn identifier(&self) -> String {
        self.name.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

/// Find the palette entry nearest to `color`.
///
/// An exact match wins. Otherwise the distance is the squared RGB distance
/// plus twice the squared distance of the 0..255-scaled HSL components; on
/// equal distance the earlier entry wins.
pub fn nearest(color: Rgb) -> ColorMatch {
    let hsl = color.hsl();
    let mut best = 0;
    let mut best_distance = i64::MAX;

    for (i, (entry, _)) in PALETTE.iter().enumerate() {
        if *entry == color {
            best = i;
            break;
        }

        let rgb_distance = square(color.r, entry.r) + square(color.g, entry.g) + square(color.b, entry.b);
        let entry_hsl = &PALETTE_HSL[i];
        let hsl_distance: i64 = hsl
            .iter()
            .zip(entry_hsl)
            .map(|(a, b)| i64::from(a - b).pow(2))
            .sum();

        let distance = rgb_distance + hsl_distance * 2;
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }

    let (rgb, name) = PALETTE[best];
    ColorMatch {
        rgb,
        name,
        exact: rgb == color,
    }
}

fn square(a: u8, b: u8) -> i64 {
    (i64::from(a) - i64::from(b)).pow(2)
}

/// LaTeX-safe name of the palette color nearest to `(r, g, b)`.
pub fn color_name(r: u8, g: u8, b: u8) -> String {
    nearest(Rgb::new(r, g, b)).identifier()
}
