//! Message array extraction.
//!
//! Scrapes the strings of a `messages = [ ... ]` assignment out of a
//! script. This is a text match, not a JavaScript parser: escaped quotes,
//! nested arrays and computed elements are not understood and simply yield
//! fewer (or odd) strings.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"messages\s*=\s*\[([^\]]+)\]").expect("assignment pattern is valid")
});

static DOUBLE_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("double-quote pattern is valid"));

static SINGLE_QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'").expect("single-quote pattern is valid"));

/// Extract the `messages` string array from script source.
///
/// Double-quoted strings come first, then single-quoted ones, each in
/// source order. Strings are trimmed and empty ones dropped. Returns an
/// empty list when no assignment is found.
pub fn extract_messages(script: &str) -> Vec<String> {
    let Some(caps) = ASSIGNMENT_RE.captures(script) else {
        debug!("no messages array in script");
        return Vec::new();
    };
    let body = &caps[1];

    let messages: Vec<String> = DOUBLE_QUOTED_RE
        .captures_iter(body)
        .chain(SINGLE_QUOTED_RE.captures_iter(body))
        .map(|c| c[1].trim().to_string())
        .filter(|m| !m.is_empty())
        .collect();

    debug!(count = messages.len(), "extracted messages");
    messages
}
