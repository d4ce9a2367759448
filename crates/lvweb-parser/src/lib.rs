//! lvweb Parser
//!
//! Turns an HTML document into the flat list of nodes the code generator
//! works from, and provides the inline-style helpers used to position and
//! color the resulting widgets.
//!
//! ```
//! use lvweb_parser::{Parser, Tag};
//!
//! let doc = Parser::parse("<h1>Hi</h1><button>Go</button>");
//! assert_eq!(doc.nodes[0].tag, Tag::H1);
//! assert_eq!(doc.nodes[1].text, "Go");
//! ```

pub mod ast;
pub mod parser;
pub mod style;

pub use ast::{AttributeSet, Document, Node, StyleMap, Tag, BUTTON_TAGS, HEADING_TAGS, TEXT_TAGS};
pub use parser::{Parser, ScanState};
pub use style::{parse_color, parse_length, parse_style, pick_font, Font, COORD_MAX, FONT_SIZES};
