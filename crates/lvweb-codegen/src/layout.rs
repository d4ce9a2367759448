//! Layout decisions.
//!
//! Everything the emitter needs to know about a document is settled here
//! first: title and default texts, layout mode, button grid, and how clicks
//! behave. The emitter then only formats.

use lvweb_parser::ast::PLACEHOLDER_TEXT;
use lvweb_parser::{parse_length, Document, Node};

/// Title used when the document has no heading.
pub const DEFAULT_TITLE: &str = "LVGL Demo";

/// Button label used when the document has no button.
pub const DEFAULT_BUTTON_TEXT: &str = "Click";

/// Display text used when the document has no text block.
pub const DEFAULT_TEXT: &str = PLACEHOLDER_TEXT;

/// Upper bound on columns in the flow-layout button grid.
pub const MAX_GRID_COLUMNS: usize = 10;

/// Inline style properties that switch the document to absolute layout.
pub const POSITION_PROPERTIES: &[&str] = &["left", "top", "width", "height"];

/// Attributes that switch the document to absolute layout.
pub const POSITION_ATTRIBUTES: &[&str] = &["data-x", "data-y", "data-w", "data-h"];

/// How widgets are arranged on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Centered column: title, display label, then buttons.
    Flow,
    /// Every node at explicit pixel coordinates.
    Absolute,
}

/// What a button click does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickBehavior {
    /// Advance a shared index through the message list.
    CycleMessages,
    /// Show the clicked button's own text.
    ButtonLabel,
}

/// Percentage-sized cells for the flow-layout button grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
    pub width_pct: usize,
    pub height_pct: usize,
}

impl Grid {
    pub fn for_buttons(count: usize) -> Self {
        let columns = count.clamp(1, MAX_GRID_COLUMNS);
        let rows = count.div_ceil(columns);
        Self {
            columns,
            rows,
            width_pct: (100 / columns).max(1),
            height_pct: (100 / rows.max(1)).max(1),
        }
    }
}

/// A resolved pixel rectangle for absolute layout.
///
/// `None` width or height means size to content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl Placement {
    /// Resolve a node's rectangle: inline style first, then `data-*`
    /// attributes, then the origin / content size.
    pub fn of(node: &Node) -> Self {
        let length = |property: &str, attribute: &str| {
            node.style_value(property)
                .and_then(parse_length)
                .or_else(|| node.attr(attribute).and_then(parse_length))
        };
        Self {
            x: length("left", "data-x").unwrap_or(0),
            y: length("top", "data-y").unwrap_or(0),
            width: length("width", "data-w"),
            height: length("height", "data-h"),
        }
    }
}

/// The decisions for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub title: String,
    pub first_text: String,
    pub button_text: String,
    /// Button texts in document order.
    pub button_labels: Vec<String>,
    pub multi_buttons: bool,
    pub click: ClickBehavior,
    /// The message set cycled at runtime.
    pub messages: Vec<String>,
    pub layout: LayoutMode,
    pub grid: Grid,
}

impl Plan {
    pub fn new(doc: &Document, messages: &[String]) -> Self {
        let title = doc
            .nodes
            .iter()
            .find(|n| n.tag.is_heading())
            .map_or(DEFAULT_TITLE, |n| n.text.as_str())
            .to_string();

        let first_text = doc
            .text_nodes()
            .next()
            .map(|n| n.text.as_str())
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TEXT)
            .to_string();

        let button_labels: Vec<String> = doc.button_nodes().map(|n| n.text.clone()).collect();
        let button_text = button_labels
            .first()
            .map_or(DEFAULT_BUTTON_TEXT, String::as_str)
            .to_string();

        let click = if messages.is_empty() {
            ClickBehavior::ButtonLabel
        } else {
            ClickBehavior::CycleMessages
        };
        let messages = if messages.is_empty() {
            vec![first_text.clone()]
        } else {
            messages.to_vec()
        };

        let layout = if uses_absolute_layout(doc) {
            LayoutMode::Absolute
        } else {
            LayoutMode::Flow
        };

        Self {
            title,
            first_text,
            button_text,
            multi_buttons: button_labels.len() > 1,
            grid: Grid::for_buttons(button_labels.len()),
            button_labels,
            click,
            messages,
            layout,
        }
    }

    pub fn use_messages(&self) -> bool {
        self.click == ClickBehavior::CycleMessages
    }

    pub fn use_absolute(&self) -> bool {
        self.layout == LayoutMode::Absolute
    }
}

/// Whether any node carries a positioning signal.
///
/// The answer applies to the whole document: one absolutely positioned
/// element moves every node to absolute layout.
pub fn uses_absolute_layout(doc: &Document) -> bool {
    doc.nodes.iter().any(|node| {
        node.style_value("position") == Some("absolute")
            || POSITION_PROPERTIES
                .iter()
                .any(|p| node.style.contains_key(*p))
            || POSITION_ATTRIBUTES
                .iter()
                .any(|a| node.attrs.contains_key(*a))
    })
}
