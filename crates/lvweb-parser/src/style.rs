//! Inline style helpers.
//!
//! Just enough CSS to place and color widgets: declaration lists, pixel
//! lengths, hex and `rgb()` colors, and snapping a font size onto the
//! fonts compiled into the LVGL build. Unparseable input yields `None` or
//! an empty map, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::ast::StyleMap;

/// Largest coordinate magnitude LVGL v8 represents (`LV_COORD_MAX`).
pub const COORD_MAX: i32 = (1 << 13) - 1;

/// Font sizes enabled in `lv_conf.h`, ascending.
pub const FONT_SIZES: [i32; 5] = [16, 18, 22, 30, 36];

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgb\(\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*\)$",
    )
    .expect("rgb() pattern is valid")
});

/// A Montserrat font from [`FONT_SIZES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    size: i32,
}

impl Font {
    pub fn size(self) -> i32 {
        self.size
    }

    /// The LVGL font object name, e.g. `lv_font_montserrat_18`.
    pub fn symbol(self) -> String {
        format!("lv_font_montserrat_{}", self.size)
    }
}

/// Split a `key: value; key: value` declaration list into a map.
///
/// Keys are lower-cased; keys and values are trimmed. A declaration without
/// a colon, or with an empty key or value, is dropped.
pub fn parse_style(raw: &str) -> StyleMap {
    raw.split(';')
        .filter_map(|decl| {
            let (key, value) = decl.split_once(':')?;
            let key = key.trim().to_lowercase();
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key, value.to_string()))
        })
        .collect()
}

/// Resolve a CSS length to whole pixels.
///
/// Accepts `12`, `12px`, `12.5PX`. Percentages and anything non-numeric
/// yield `None`, as do lengths beyond [`COORD_MAX`]. Halves round to even.
pub fn parse_length(value: &str) -> Option<i32> {
    let value = value.trim();
    if value.ends_with('%') {
        return None;
    }
    let number = match value.len().checked_sub(2) {
        Some(split) if value.is_char_boundary(split) && value[split..].eq_ignore_ascii_case("px") => {
            value[..split].trim_end()
        }
        _ => value,
    };
    let parsed: f64 = number.parse().ok()?;
    let rounded = parsed.round_ties_even();
    if !rounded.is_finite() || rounded.abs() > f64::from(COORD_MAX) {
        return None;
    }
    Some(rounded as i32)
}

/// Resolve a CSS color to a 24-bit `0xRRGGBB` value.
///
/// Accepts `#rgb`, `#rrggbb` and `rgb(r, g, b)`; channels outside
/// `0..=255` are clamped.
pub fn parse_color(value: &str) -> Option<u32> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match hex.len() {
            3 => {
                let doubled: String = hex.chars().flat_map(|c| [c, c]).collect();
                u32::from_str_radix(&doubled, 16).ok()
            }
            6 => u32::from_str_radix(hex, 16).ok(),
            _ => None,
        };
    }

    let caps = RGB_RE.captures(value)?;
    let mut rgb = 0u32;
    for i in 1..=3 {
        let channel: f64 = caps[i].parse().ok()?;
        let channel = channel.clamp(0.0, 255.0).round_ties_even() as u32;
        rgb = (rgb << 8) | channel;
    }
    Some(rgb)
}

/// Pick the available font closest to `size_px`.
///
/// Ties go to the smaller font.
pub fn pick_font(size_px: Option<i32>) -> Option<Font> {
    let size = i64::from(size_px?);
    FONT_SIZES
        .iter()
        .copied()
        .min_by_key(|candidate| (i64::from(*candidate) - size).unsigned_abs())
        .map(|size| Font { size })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // =========================================================================
    // parse_style
    // =========================================================================

    #[test]
    fn test_style_basic() {
        assert_eq!(
            parse_style("color: red; Font-Size: 20px"),
            style(&[("color", "red"), ("font-size", "20px")])
        );
    }

    #[test]
    fn test_style_splits_on_first_colon() {
        assert_eq!(
            parse_style("background: url(http://x/y.png)"),
            style(&[("background", "url(http://x/y.png)")])
        );
    }

    #[test]
    fn test_style_drops_malformed_declarations() {
        assert_eq!(
            parse_style("nonsense; :red; color:; ; left: 3px"),
            style(&[("left", "3px")])
        );
    }

    #[test]
    fn test_style_empty_and_garbage() {
        assert!(parse_style("").is_empty());
        assert!(parse_style(";;;").is_empty());
        assert!(parse_style("}{ <> \u{0}").is_empty());
    }

    #[test]
    fn test_style_idempotent_on_well_formed_input() {
        let first = parse_style("left:10px;top:20px;color:#fff");
        let rendered: Vec<String> = first.iter().map(|(k, v)| format!("{k}:{v}")).collect();
        assert_eq!(parse_style(&rendered.join(";")), first);
    }

    // =========================================================================
    // parse_length
    // =========================================================================

    #[test]
    fn test_length_pixels() {
        assert_eq!(parse_length("10px"), Some(10));
        assert_eq!(parse_length("10PX"), Some(10));
        assert_eq!(parse_length(" 42 "), Some(42));
        assert_eq!(parse_length("-8px"), Some(-8));
    }

    #[test]
    fn test_length_rounds() {
        assert_eq!(parse_length("10.6px"), Some(11));
        assert_eq!(parse_length("10.4"), Some(10));
        assert_eq!(parse_length("2.5px"), Some(2));
        assert_eq!(parse_length("3.5px"), Some(4));
    }

    #[test]
    fn test_length_percent_is_unresolved() {
        assert_eq!(parse_length("50%"), None);
    }

    #[test]
    fn test_length_non_numeric() {
        assert_eq!(parse_length("auto"), None);
        assert_eq!(parse_length("2em"), None);
        assert_eq!(parse_length(""), None);
        assert_eq!(parse_length("px"), None);
        assert_eq!(parse_length("inf"), None);
    }

    #[test]
    fn test_length_beyond_coordinate_range() {
        assert_eq!(parse_length("1e12px"), None);
        assert_eq!(parse_length("-1e12px"), None);
        assert_eq!(parse_length("8192"), None);
        assert_eq!(parse_length("8191px"), Some(COORD_MAX));
        assert_eq!(parse_length("-8191"), Some(-COORD_MAX));
    }

    // =========================================================================
    // parse_color
    // =========================================================================

    #[test]
    fn test_color_hex() {
        assert_eq!(parse_color("#fff"), Some(0xFFFFFF));
        assert_eq!(parse_color("#ffffff"), Some(0xFFFFFF));
        assert_eq!(parse_color("#1A2b3C"), Some(0x1A2B3C));
        assert_eq!(parse_color("#abc"), Some(0xAABBCC));
    }

    #[test]
    fn test_color_rgb() {
        assert_eq!(parse_color("rgb(0,128,255)"), Some(0x0080FF));
        assert_eq!(parse_color("RGB( 1 , 2 , 3 )"), Some(0x010203));
    }

    #[test]
    fn test_color_rgb_clamps() {
        assert_eq!(parse_color("rgb(300, -5, 128)"), Some(0xFF0080));
    }

    #[test]
    fn test_color_rejects_other_forms() {
        assert_eq!(parse_color("notacolor"), None);
        assert_eq!(parse_color("red"), None);
        assert_eq!(parse_color("#ffff"), None);
        assert_eq!(parse_color("#ggg"), None);
        assert_eq!(parse_color("rgba(0,0,0,1)"), None);
        assert_eq!(parse_color("rgb(1,2)"), None);
    }

    // =========================================================================
    // pick_font
    // =========================================================================

    #[test]
    fn test_font_absent() {
        assert_eq!(pick_font(None), None);
    }

    #[test]
    fn test_font_exact() {
        assert_eq!(pick_font(Some(36)).map(Font::size), Some(36));
        assert_eq!(pick_font(Some(16)).map(Font::size), Some(16));
    }

    #[test]
    fn test_font_tie_goes_to_smaller() {
        assert_eq!(pick_font(Some(20)).map(Font::size), Some(18));
        assert_eq!(pick_font(Some(26)).map(Font::size), Some(22));
    }

    #[test]
    fn test_font_out_of_range() {
        assert_eq!(pick_font(Some(4)).map(Font::size), Some(16));
        assert_eq!(pick_font(Some(120)).map(Font::size), Some(36));
        assert_eq!(pick_font(Some(i32::MIN)).map(Font::size), Some(16));
    }

    #[test]
    fn test_font_symbol() {
        assert_eq!(
            pick_font(Some(29)).map(Font::symbol).as_deref(),
            Some("lv_font_montserrat_30")
        );
    }
}
