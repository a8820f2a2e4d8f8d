//! LatexService - the main entry point for HTML to LaTeX conversion.

use codetex_palette::Rgb;

use crate::node::Node;
use crate::registry::ColorRegistry;
use crate::style::{style_color, ColorSyntax};
use crate::utilities::{classify, escape_latex, TagKind, BLOCK_ELEMENTS, LINE_BREAK};

/// Definition of the space-preserving `code` environment.
pub const ENVIRONMENT_DEFINITION: &str = r"\newsavebox\spacewd
\savebox\spacewd{\texttt{ }}
\newenvironment{code}{\par\catcode32=\active \setlength{\parindent}{0pt}\ttfamily}{\par}
{
\catcode32=\active %
\gdef {\makebox[\wd\spacewd][l]{%
\phantom{\textcolor{white}{\fontfamily{lmtt}\selectfont\large\smash{\char32}}}}}%
}
";

const BEGIN_CODE: &str = "\\begin{code}\n";
const END_CODE: &str = "\n\\end{code}";

/// Options for LatexService
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Tags that start a new line (case-insensitive)
    pub block_tags: Vec<String>,

    /// Accepted notations for inline `color` values
    pub color_syntax: ColorSyntax,

    /// Emit the environment definition before `\begin{code}`
    pub include_preamble: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            block_tags: BLOCK_ELEMENTS.iter().map(|t| t.to_string()).collect(),
            color_syntax: ColorSyntax::Strict,
            include_preamble: true,
        }
    }
}

/// The main service for converting highlighted HTML to LaTeX
#[derive(Debug, Clone, Default)]
pub struct LatexService {
    options: ConvertOptions,
}

impl LatexService {
    /// Create a LatexService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a LatexService with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Parse `html` and convert its body to LaTeX
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> String {
        self.convert_node(&crate::html::parse_html(html))
    }

    /// Convert a tree rooted at a body-like node to LaTeX
    pub fn convert_node(&self, root: &Node) -> String {
        let mut conversion = Conversion::new(&self.options);
        conversion.visit(root, None);

        log::trace!(
            "converted {} nodes into {} bytes with {} colors",
            root.count(),
            conversion.body.len(),
            conversion.registry.len()
        );

        conversion.finish()
    }

    /// Escape LaTeX special characters in a string
    pub fn escape(&self, text: &str) -> String {
        escape_latex(text)
    }

    /// Get the current options
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut ConvertOptions {
        &mut self.options
    }
}

/// State of one conversion run
struct Conversion<'a> {
    options: &'a ConvertOptions,
    registry: ColorRegistry,
    body: String,
}

impl<'a> Conversion<'a> {
    fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            registry: ColorRegistry::new(),
            body: String::new(),
        }
    }

    /// Depth-first walk from `root`.
    ///
    /// Each frame carries a node and the color of its nearest colored
    /// ancestor. Children are pushed in reverse so they pop in document
    /// order, and output is only written when a frame is popped.
    fn visit(&mut self, root: &Node, color: Option<Rgb>) {
        let mut stack = vec![(root, color)];

        while let Some((node, color)) = stack.pop() {
            match node {
                Node::Text(text) => self.push_text(text, color),
                Node::Element(element) => {
                    match classify(&element.tag, self.options.block_tags.as_slice()) {
                        TagKind::LineBreak => {
                            self.body.push_str(LINE_BREAK);
                            continue;
                        }
                        TagKind::Block if !self.body.is_empty() => self.body.push_str(LINE_BREAK),
                        _ => {}
                    }

                    let color = self.element_color(node).or(color);
                    stack.extend(element.children.iter().rev().map(|child| (child, color)));
                }
            }
        }
    }

    fn element_color(&self, node: &Node) -> Option<Rgb> {
        match style_color(node.attr("style")?, self.options.color_syntax)? {
            Ok(rgb) => Some(rgb),
            Err(err) => {
                log::debug!("ignoring color on <{}>: {}", node.tag_name(), err);
                None
            }
        }
    }

    fn push_text(&mut self, text: &str, color: Option<Rgb>) {
        if text.is_empty() {
            return;
        }

        let escaped = escape_latex(text);
        match color {
            Some(rgb) => {
                let name = self.registry.name_for(rgb);
                self.body.push_str("\\textcolor{");
                self.body.push_str(name);
                self.body.push_str("}{");
                self.body.push_str(&escaped);
                self.body.push('}');
            }
            None => self.body.push_str(&escaped),
        }
    }

    fn finish(self) -> String {
        let definitions = self.registry.definitions();
        let preamble = if self.options.include_preamble {
            ENVIRONMENT_DEFINITION
        } else {
            ""
        };

        let mut out = String::with_capacity(
            preamble.len() + BEGIN_CODE.len() + definitions.len() + self.body.len() + END_CODE.len(),
        );
        out.push_str(preamble);
        out.push_str(BEGIN_CODE);
        out.push_str(&definitions);
        out.push_str(&self.body);
        out.push_str(END_CODE);
        out
    }
}
