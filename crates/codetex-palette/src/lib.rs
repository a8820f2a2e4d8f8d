//! codetex-palette - color naming for LaTeX output
//!
//! Maps an RGB triplet to the nearest entry of a built-in named-color table
//! and turns the entry's display name into an identifier that can be used
//! directly in `\definecolor` / `\textcolor`.
//!
//! # Example
//!
//! ```rust
//! use codetex_palette::{color_name, nearest, Rgb};
//!
//! assert_eq!(color_name(255, 0, 0), "Red");
//! assert_eq!(color_name(240, 248, 255), "AliceBlue");
//!
//! let found = nearest(Rgb::new(250, 1, 3));
//! assert_eq!(found.name, "Red");
//! assert!(!found.exact);
//! ```

mod namer;
mod rgb;
mod table;

pub use namer::{color_name, nearest, ColorMatch};
pub use rgb::{rgb_to_hex, Rgb};
pub use table::PALETTE;
