//! Markup scanner.
//!
//! Drives html5ever's streaming tokenizer (no tree builder) and collects
//! text blocks and buttons into a flat [`Document`]. Only one element is
//! tracked at a time: while an element is open, nested start tags are
//! ignored and their text lands in the open element's buffer.
//!
//! The tokenizer lower-cases names and decodes character references,
//! including the legacy forms written without a trailing `;`.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag as RawTag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer,
    TokenizerOpts,
};
use tracing::{debug, trace};

use crate::ast::{AttributeSet, Document, Node, Tag};

/// Markup scanner entry point.
pub struct Parser;

impl Parser {
    /// Parse HTML source into the ordered sequence of collected nodes.
    ///
    /// An element still open at end of input is discarded.
    pub fn parse(source: &str) -> Document {
        let mut input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(source));

        let mut tokenizer = Tokenizer::new(Collector::default(), TokenizerOpts::default());
        let _ = tokenizer.feed(&mut input);
        tokenizer.end();

        let Collector { state, nodes } = tokenizer.sink;
        if let Some(tag) = state.open_tag() {
            debug!(%tag, "element left open at end of input, dropped");
        }

        debug!(nodes = nodes.len(), "collected markup nodes");
        Document::new(nodes)
    }
}

/// Token sink feeding [`ScanState`].
#[derive(Default)]
struct Collector {
    state: ScanState,
    nodes: Vec<Node>,
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let raw = match &token {
            Token::TagToken(tag) => raw_text_kind(tag),
            _ => None,
        };
        let state = std::mem::take(&mut self.state);
        self.state = state.handle(token, &mut self.nodes);
        match raw {
            Some(kind) => TokenSinkResult::RawData(kind),
            None => TokenSinkResult::Continue,
        }
    }
}

/// `<script>` and `<style>` bodies are raw text, not markup.
fn raw_text_kind(tag: &RawTag) -> Option<RawKind> {
    if tag.kind != TagKind::StartTag || tag.self_closing {
        return None;
    }
    match &*tag.name {
        "script" => Some(RawKind::ScriptData),
        "style" => Some(RawKind::Rawtext),
        _ => None,
    }
}

fn attribute_set(tag: &RawTag) -> AttributeSet {
    tag.attrs
        .iter()
        .map(|a| (a.name.local.to_string(), a.value.to_string()))
        .collect()
}

/// The element currently being collected.
#[derive(Debug, Clone, PartialEq)]
struct OpenElement {
    tag: Tag,
    attrs: AttributeSet,
    buffer: String,
}

/// Scanner state threaded through token handling.
///
/// Each handler consumes the state and returns the next one, so a scan
/// carries no hidden mutable fields and any step can be tested alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanState {
    open: Option<OpenElement>,
}

impl ScanState {
    /// The tag of the element being collected, if any.
    pub fn open_tag(&self) -> Option<Tag> {
        self.open.as_ref().map(|el| el.tag)
    }

    /// Advance the state by one token, appending finished nodes to `out`.
    pub fn handle(self, token: Token, out: &mut Vec<Node>) -> Self {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => {
                    let state = self.start_tag(&tag.name, attribute_set(&tag));
                    if tag.self_closing {
                        state.end_tag(&tag.name, out)
                    } else {
                        state
                    }
                }
                TagKind::EndTag => self.end_tag(&tag.name, out),
            },
            Token::CharacterTokens(text) => self.text(&text),
            _ => self,
        }
    }

    /// Open a recognized element, unless one is already open.
    pub fn start_tag(self, name: &str, attrs: AttributeSet) -> Self {
        if self.open.is_some() {
            return self;
        }
        let Some(tag) = Tag::from_name(name) else {
            return self;
        };
        trace!(%tag, "open element");
        Self {
            open: Some(OpenElement {
                tag,
                attrs,
                buffer: String::new(),
            }),
        }
    }

    /// Accumulate text into the open element, if any.
    pub fn text(self, text: &str) -> Self {
        match self.open {
            Some(mut el) => {
                el.buffer.push_str(text);
                Self { open: Some(el) }
            }
            None => self,
        }
    }

    /// Close the open element if `name` matches it.
    ///
    /// Emits a node when the trimmed text is non-empty; the open state is
    /// cleared either way.
    pub fn end_tag(self, name: &str, out: &mut Vec<Node>) -> Self {
        match self.open {
            Some(el) if el.tag.as_str() == name => {
                let node = Node::new(el.tag, &el.buffer, el.attrs);
                if node.text.is_empty() {
                    trace!(tag = %el.tag, "empty element skipped");
                } else {
                    out.push(node);
                }
                Self::default()
            }
            open => Self { open },
        }
    }
}
