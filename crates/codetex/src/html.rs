//! HTML parsing support.
//!
//! Parses an HTML string with html5ever (through `scraper`) and converts
//! the document body to the [`Node`] tree used by the converter.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML string into a Node tree rooted at the `body` element.
///
/// Parsing follows the HTML standard: unclosed tags are closed, entities
/// decoded, and content such as `<meta>` ends up in `head`, outside the
/// returned tree. Comments and doctypes are dropped.
///
/// # Example
///
/// ```rust
/// use codetex::parse_html;
///
/// let body = parse_html("<div>fn <span>main</span></div>");
/// assert_eq!(body.tag_name(), "body");
/// assert_eq!(body.text_content(), "fn main");
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let body = root
        .children()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == "body")
        .unwrap_or(root);

    scraper_to_node(body)
}

/// Convert a scraper ElementRef to our Node structure.
///
/// Each stack frame holds a node under construction and a cursor on its
/// next unvisited scraper child.
fn scraper_to_node(root: ElementRef) -> Node {
    let mut stack = vec![(element_node(root), root.first_child())];

    loop {
        let top = stack.len() - 1;
        let cursor = stack[top].1;
        match cursor {
            Some(child) => {
                stack[top].1 = child.next_sibling();
                match child.value() {
                    ScraperNode::Text(text) => stack[top].0.add_child(Node::text(&text.text)),
                    ScraperNode::Element(_) => {
                        if let Some(child_element) = ElementRef::wrap(child) {
                            stack.push((element_node(child_element), child_element.first_child()));
                        }
                    }
                    _ => {}
                }
            }
            None => {
                let (done, _) = stack.swap_remove(top);
                match stack.last_mut() {
                    Some((parent, _)) => parent.add_child(done),
                    None => return done,
                }
            }
        }
    }
}

fn element_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    Node::element_with_attrs(element.value().name(), attrs)
}
