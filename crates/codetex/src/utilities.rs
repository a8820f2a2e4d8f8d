//! Tag classification and LaTeX escaping.

/// Tags that start a new line by default
pub const BLOCK_ELEMENTS: &[&str] = &["div", "p"];

/// LaTeX line break emitted for block boundaries and `<br>`
pub const LINE_BREAK: &str = "\\\\\n";

/// How an element affects line structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Starts a new line unless nothing has been written yet
    Block,
    /// `<br>`: a line break, its children are never visited
    LineBreak,
    Inline,
}

/// Classify `tag` against a list of block tags.
///
/// `br` is always a line break, even when listed as a block tag.
pub fn classify<S: AsRef<str>>(tag: &str, block_tags: &[S]) -> TagKind {
    if tag.eq_ignore_ascii_case("br") {
        TagKind::LineBreak
    } else if block_tags.iter().any(|b| b.as_ref().eq_ignore_ascii_case(tag)) {
        TagKind::Block
    } else {
        TagKind::Inline
    }
}

/// Escape LaTeX special characters.
///
/// Single pass, so backslashes inserted for one character are never escaped
/// again. `\{` becomes `\textbackslash\{`.
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' => result.push_str("\\textbackslash"),
            '~' => result.push_str("\\textasciitilde"),
            '^' => result.push_str("\\textasciicircum"),
            '{' | '}' | '&' | '%' | '$' | '#' | '_' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
