use lvweb_codegen::{extract_messages, ui_source, UI_SOURCE_PREAMBLE};
use proptest::prelude::*;

/// Small pages built from the recognized tags, with optional inline style.
fn page() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["p", "span", "h1", "h2", "h3", "button", "div"]),
            "([a-z-]{1,8}: ?[a-z0-9#.%]{1,6};?){0,3}",
            "[a-zA-Z0-9 &;<>\"']{0,16}",
        ),
        0..8,
    )
    .prop_map(|elements| {
        elements
            .into_iter()
            .map(|(tag, style, text)| format!("<{tag} style=\"{style}\">{text}</{tag}>"))
            .collect()
    })
}

proptest! {
    #[test]
    fn generation_is_deterministic(html in ".{0,300}", script in proptest::option::of(".{0,200}")) {
        prop_assert_eq!(
            ui_source(&html, script.as_deref()),
            ui_source(&html, script.as_deref())
        );
    }

    #[test]
    fn generated_source_has_entry_point(html in page(), script in proptest::option::of(".{0,120}")) {
        let c = ui_source(&html, script.as_deref());
        prop_assert!(c.starts_with(UI_SOURCE_PREAMBLE));
        prop_assert!(c.contains("void ui_build(void)"));
        prop_assert!(c.contains("static lv_obj_t * display_label;"));
    }

    #[test]
    fn messages_are_trimmed_and_non_empty(script in ".{0,200}") {
        for message in extract_messages(&script) {
            prop_assert!(!message.is_empty());
            prop_assert_eq!(message.trim(), message.as_str());
        }
    }
}
