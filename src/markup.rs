//! Typed HTML builder
//!
//! Every text node and attribute value is escaped when serialized, and
//! attribute names must be `&'static str`. Unescaped markup can only come
//! from `&'static str` literals (stylesheet, script, glyph entities), so
//! record content has no path into the page except as escaped text.

/// Elements serialized without a closing tag
const VOID_TAGS: &[&str] = &["meta", "link", "br", "img", "input", "hr"];

/// A node in the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Escaped on output
    Text(String),
    /// Trusted compile-time markup
    Raw(&'static str),
    /// Children spliced into the parent without a wrapper
    Fragment(Vec<Node>),
}

impl Node {
    pub fn write_to(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_to(out),
            Node::Text(text) => escape_into(out, text),
            Node::Raw(raw) => out.push_str(raw),
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.write_to(out);
                }
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(node: Option<T>) -> Self {
        match node {
            Some(node) => node.into(),
            None => Node::Fragment(Vec::new()),
        }
    }
}

/// An HTML element with ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

/// Start building a `<tag>` element
pub fn el(tag: &'static str) -> Element {
    Element {
        tag,
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Add `name="value"`
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// Add a valueless boolean attribute such as `allowfullscreen`
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Value of the first attribute called `name`
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append an escaped text node
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Append trusted markup
    pub fn raw(self, markup: &'static str) -> Self {
        self.child(Node::Raw(markup))
    }

    pub fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                escape_into(out, value);
                out.push('"');
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_to(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);
        self.write_to(&mut out);
        out
    }
}

/// Serialize `root` as a complete HTML5 document
pub fn document(root: &Element) -> String {
    let mut out = String::with_capacity(64 * 1024);
    out.push_str("<!DOCTYPE html>\n");
    root.write_to(&mut out);
    out.push('\n');
    out
}

/// Escape text for use in element content or a quoted attribute value
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn escaped_text_never_opens_a_tag(ref input in ".{0,200}") {
            let html = el("p").attr("title", input.clone()).text(input.clone()).render();
            let inner = &html["<p ".len()..html.len() - "</p>".len()];
            prop_assert!(!inner.contains('<'));
        }
    }
}
