//! # codetex
//!
//! Convert syntax-highlighted HTML, as copied from a code editor, into a
//! LaTeX fragment that keeps the per-character foreground colors and the
//! line breaks.
//!
//! ## Design
//!
//! The input is parsed into a [`Node`] tree and walked depth-first. Each
//! element may set a foreground color through its inline `style`; text
//! inherits the color of its nearest colored ancestor. Colors are named
//! after the nearest entry of a built-in palette (see `codetex-palette`)
//! and defined once with `\definecolor` ahead of the body.
//!
//! The output always has the same shape:
//!
//! ```text
//! <definition of the `code` environment>
//! \begin{code}
//! \definecolor{<name>}{RGB}{r,g,b}     (one per color, first use first)
//! <body>
//! \end{code}
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! let latex = codetex::convert(r#"<div style="color: rgb(255,0,0)">Hi</div>"#);
//! assert!(latex.contains("\\definecolor{Red}{RGB}{255,0,0}\n"));
//! assert!(latex.contains("\\textcolor{Red}{Hi}"));
//! assert!(latex.ends_with("\\end{code}"));
//! ```
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use codetex::{LatexService, Node};
//!
//! let body = Node::element("body")
//!     .with_child(Node::text("a"))
//!     .with_child(Node::element("br"))
//!     .with_child(Node::text("b"));
//!
//! let latex = LatexService::new().convert_node(&body);
//! assert!(latex.contains("a\\\\\nb"));
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod registry;
mod service;
mod style;
mod utilities;

pub use codetex_palette::{color_name, Rgb};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Element, Node};
pub use registry::ColorRegistry;
pub use service::{ConvertOptions, LatexService, ENVIRONMENT_DEFINITION};
pub use style::{color_declarations, parse_color, style_color, ColorError, ColorSyntax};
pub use utilities::*;

/// Convert highlighted HTML to LaTeX with default options.
///
/// Never fails: unrecognized colors are treated as absent and the HTML
/// parser recovers from malformed markup.
#[cfg(feature = "html")]
pub fn convert(markup: &str) -> String {
    LatexService::new().convert_html(markup)
}
