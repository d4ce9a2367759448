//! Node types collected from an HTML document.
//!
//! The translator does not build a DOM. A document is a flat, ordered list
//! of the elements it knows how to turn into widgets: text blocks and
//! buttons. Everything else in the page is skipped.

use std::collections::BTreeMap;
use std::fmt;

use crate::style::parse_style;

/// Inline CSS declarations, keyed by lower-cased property name.
pub type StyleMap = BTreeMap<String, String>;

/// Attributes captured from an element's start tag.
pub type AttributeSet = BTreeMap<String, String>;

/// Text shown by the placeholder node of an empty document.
pub const PLACEHOLDER_TEXT: &str = "(empty)";

/// An element kind the translator turns into a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    P,
    Span,
    H1,
    H2,
    H3,
    Button,
}

/// Tags rendered as labels.
pub const TEXT_TAGS: &[Tag] = &[Tag::P, Tag::Span, Tag::H1, Tag::H2, Tag::H3];

/// Tags eligible to provide the page title.
pub const HEADING_TAGS: &[Tag] = &[Tag::H1, Tag::H2, Tag::H3];

/// Tags rendered as clickable buttons.
pub const BUTTON_TAGS: &[Tag] = &[Tag::Button];

impl Tag {
    /// Look up a tag by its lower-case HTML name.
    pub fn from_name(name: &str) -> Option<Self> {
        TEXT_TAGS
            .iter()
            .chain(BUTTON_TAGS)
            .copied()
            .find(|tag| tag.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::P => "p",
            Tag::Span => "span",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::Button => "button",
        }
    }

    pub fn is_text(self) -> bool {
        TEXT_TAGS.contains(&self)
    }

    pub fn is_heading(self) -> bool {
        HEADING_TAGS.contains(&self)
    }

    pub fn is_button(self) -> bool {
        BUTTON_TAGS.contains(&self)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One collected element.
///
/// `style` is derived from `attrs["style"]` at construction and the node is
/// not modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub text: String,
    pub attrs: AttributeSet,
    pub style: StyleMap,
}

impl Node {
    /// Build a node, trimming `text` and parsing the inline style.
    pub fn new(tag: Tag, text: &str, attrs: AttributeSet) -> Self {
        let style = attrs
            .get("style")
            .map(|raw| parse_style(raw))
            .unwrap_or_default();
        Self {
            tag,
            text: text.trim().to_string(),
            attrs,
            style,
        }
    }

    /// The `p "(empty)"` node that stands in for a document with no content.
    pub fn placeholder() -> Self {
        Self::new(Tag::P, PLACEHOLDER_TEXT, AttributeSet::new())
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }
}

/// An ordered sequence of collected nodes.
///
/// Order follows the closing tags in the source and drives emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Substitute a single placeholder node when nothing was collected, so
    /// generation always has at least one text node to work with.
    pub fn or_placeholder(self) -> Self {
        if self.nodes.is_empty() {
            Self::new(vec![Node::placeholder()])
        } else {
            self
        }
    }

    pub fn text_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.tag.is_text())
    }

    pub fn button_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.tag.is_button())
    }
}
