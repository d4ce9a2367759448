use std::collections::BTreeMap;

use lvweb_parser::{parse_color, parse_length, parse_style, pick_font, COORD_MAX, FONT_SIZES};
use proptest::prelude::*;

fn render(map: &BTreeMap<String, String>) -> String {
    map.iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn declarations() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(
        "[a-z][a-z-]{0,12}",
        "[a-zA-Z0-9#(),.%]([a-zA-Z0-9#(),.% ]{0,10}[a-zA-Z0-9#(),.%])?",
        0..8,
    )
}

proptest! {
    #[test]
    fn style_never_panics(s in ".*") {
        let map = parse_style(&s);
        for (k, v) in &map {
            prop_assert!(!k.is_empty());
            prop_assert!(!v.is_empty());
            prop_assert_eq!(v.trim(), v.as_str());
        }
    }

    #[test]
    fn style_round_trips_declarations(map in declarations()) {
        prop_assert_eq!(parse_style(&render(&map)), map);
    }

    #[test]
    fn style_reparse_is_idempotent(s in ".{0,200}") {
        let first = parse_style(&s);
        prop_assert_eq!(parse_style(&render(&first)), first);
    }

    #[test]
    fn length_is_total_and_bounded(s in ".*") {
        if let Some(px) = parse_length(&s) {
            prop_assert!(px.abs() <= COORD_MAX);
        }
    }

    #[test]
    fn length_reads_back_pixels(n in -COORD_MAX..=COORD_MAX) {
        prop_assert_eq!(parse_length(&format!("{n}px")), Some(n));
        prop_assert_eq!(parse_length(&n.to_string()), Some(n));
    }

    #[test]
    fn color_is_total_and_24_bit(s in ".*") {
        if let Some(rgb) = parse_color(&s) {
            prop_assert!(rgb <= 0xFF_FFFF);
        }
    }

    #[test]
    fn color_reads_back_channels(r in 0u32..=255, g in 0u32..=255, b in 0u32..=255) {
        let rgb = (r << 16) | (g << 8) | b;
        prop_assert_eq!(parse_color(&format!("rgb({r}, {g}, {b})")), Some(rgb));
        prop_assert_eq!(parse_color(&format!("#{rgb:06x}")), Some(rgb));
        prop_assert_eq!(parse_color(&format!("#{rgb:06X}")), Some(rgb));
    }

    #[test]
    fn font_is_always_available(size in any::<i32>()) {
        let font = pick_font(Some(size));
        prop_assert!(font.is_some_and(|f| FONT_SIZES.contains(&f.size())));
    }
}
