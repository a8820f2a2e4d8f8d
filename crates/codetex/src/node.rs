//! Markup tree consumed by the converter.
//!
//! Any HTML parser can build this structure; with the `html` feature,
//! [`parse_html`](crate::parse_html) builds it from a string.

/// A node of the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag, attributes and children
    Element(Element),
    /// Literal text, entities already decoded
    Text(String),
}

/// Element payload of a [`Node`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes in document order
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an element node without attributes
    pub fn element(tag_name: &str) -> Self {
        Node::Element(Element {
            tag: tag_name.to_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Create an element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Node::Element(Element {
            tag: tag_name.to_lowercase(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            children: Vec::new(),
        })
    }

    /// Create a text node
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Lowercase tag name, empty for text nodes
    pub fn tag_name(&self) -> &str {
        match self {
            Node::Element(element) => &element.tag,
            Node::Text(_) => "",
        }
    }

    /// Attribute value by case-insensitive name
    pub fn attr(&self, name: &str) -> Option<&str> {
        let Node::Element(element) = self else {
            return None;
        };
        element
            .attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Child nodes; text nodes have none
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Append a child. Ignored on text nodes.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.children.push(child);
        }
    }

    /// Builder form of [`add_child`](Self::add_child)
    pub fn with_child(mut self, child: Node) -> Self {
        self.add_child(child);
        self
    }

    /// Nodes of this subtree in document order, starting with itself.
    ///
    /// Walks with an explicit stack, so nesting depth is not limited by the
    /// call stack.
    pub fn descendants(&self) -> impl Iterator<Item = &Node> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children().iter().rev());
            Some(node)
        })
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        self.descendants()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Number of nodes in this subtree, including itself
    pub fn count(&self) -> usize {
        self.descendants().count()
    }
}

impl Drop for Element {
    // Flatten the subtree first; the derived drop would recurse per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            if let Node::Element(element) = &mut node {
                pending.append(&mut element.children);
            }
        }
    }
}
