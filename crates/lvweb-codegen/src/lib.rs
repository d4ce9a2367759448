//! lvweb Code Generator
//!
//! Translates the collected HTML nodes plus an optional message list into
//! LVGL C source. Layout decisions are made once in [`layout::Plan`]; the
//! [`c`] module formats them.
//!
//! ```text
//! HTML  → Parser::parse() → Document ─┐
//!                                     ├→ compile() → ui_app.c body
//! JS    → extract_messages() ─────────┘
//! ```
//!
//! Generation never fails; missing or unparseable input falls back to
//! defaults. Output is a pure function of the input text.

pub mod c;
pub mod layout;
pub mod messages;
pub mod scaffold;

use lvweb_parser::{Document, Parser};
use tracing::debug;

pub use layout::{ClickBehavior, Grid, LayoutMode, Placement, Plan};
pub use messages::extract_messages;
pub use scaffold::{
    ScaffoldFile, BUILD_SCRIPT_PATH, SCAFFOLD_FILES, UI_SOURCE_PATH, UI_SOURCE_PREAMBLE,
};

/// Generate C source for a document and message list.
pub fn compile(doc: &Document, messages: &[String]) -> String {
    let plan = Plan::new(doc, messages);
    debug!(
        layout = ?plan.layout,
        click = ?plan.click,
        nodes = doc.nodes.len(),
        buttons = plan.button_labels.len(),
        "generating LVGL source"
    );
    c::generate(doc, &plan)
}

/// Run the whole translation: parse the page, substitute the placeholder
/// for an empty page, scrape messages from the script, generate C.
pub fn translate(html: &str, script: Option<&str>) -> String {
    let doc = Parser::parse(html).or_placeholder();
    let messages = script.map(extract_messages).unwrap_or_default();
    compile(&doc, &messages)
}

/// The complete contents of `generated/ui_app.c`.
pub fn ui_source(html: &str, script: Option<&str>) -> String {
    let mut source = String::from(UI_SOURCE_PREAMBLE);
    source.push_str(&translate(html, script));
    source
}
