use plotters::style::RGBColor;
use std::collections::HashMap;

/// Default qualitative palette: the 8-color Set2 sequence.
pub const DEFAULT_QUALITATIVE: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

/// Category-to-color assignment for the hue series.
///
/// An explicit mapping wins where it covers a category; anything uncovered
/// falls back to the default qualitative sequence, cycling by the order the
/// caller asks for categories (deterministic when the caller iterates hues
/// in sorted order).
#[derive(Debug, Clone, Default)]
pub struct ColorPalette {
    mapping: HashMap<String, RGBColor>,
}

impl ColorPalette {
    /// Build a palette from explicit category → color-name entries.
    /// Unparseable colors are ignored, leaving the category on the fallback
    /// sequence.
    pub fn from_mapping(mapping: &HashMap<String, String>) -> Self {
        let mapping = mapping
            .iter()
            .filter_map(|(cat, color)| parse_color(color).map(|c| (cat.clone(), c)))
            .collect();
        Self { mapping }
    }

    pub fn color_for(&self, category: &str, fallback_index: usize) -> RGBColor {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(DEFAULT_QUALITATIVE[fallback_index % DEFAULT_QUALITATIVE.len()])
    }
}

/// Parse a color string into RGBColor, supporting hex (#RRGGBB, #RGB) and
/// named colors.
pub fn parse_color(color_str: &str) -> Option<RGBColor> {
    let color_str = color_str.trim();

    if color_str.starts_with('#') {
        return parse_hex_color(color_str);
    }

    match color_str.to_lowercase().as_str() {
        "white" => Some(RGBColor(255, 255, 255)),
        "black" => Some(RGBColor(0, 0, 0)),
        "red" => Some(RGBColor(255, 0, 0)),
        "green" => Some(RGBColor(0, 128, 0)),
        "blue" => Some(RGBColor(0, 0, 255)),
        "yellow" => Some(RGBColor(255, 255, 0)),
        "cyan" => Some(RGBColor(0, 255, 255)),
        "magenta" => Some(RGBColor(255, 0, 255)),
        "orange" => Some(RGBColor(255, 165, 0)),
        "purple" => Some(RGBColor(128, 0, 128)),
        "pink" => Some(RGBColor(255, 192, 203)),
        "grey" | "gray" => Some(RGBColor(128, 128, 128)),
        "darkgrey" | "darkgray" => Some(RGBColor(169, 169, 169)),
        "lightgrey" | "lightgray" => Some(RGBColor(211, 211, 211)),
        _ => None,
    }
}

fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let digits = &hex[1..];
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some(RGBColor(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&digits[0..1], 16).ok()?;
            let g = u8::from_str_radix(&digits[1..2], 16).ok()?;
            let b = u8::from_str_radix(&digits[2..3], 16).ok()?;
            // Expand shorthand: #abc -> #aabbcc
            Some(RGBColor(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("red"), Some(RGBColor(255, 0, 0)));
        assert_eq!(parse_color("DarkGrey"), Some(RGBColor(169, 169, 169)));
        assert_eq!(parse_color("nonsense"), None);
    }

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#66c2a5"), Some(RGBColor(102, 194, 165)));
        assert_eq!(parse_color("#fff"), Some(RGBColor(255, 255, 255)));
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn test_parse_color_hex_non_ascii() {
        // Multi-byte characters must be rejected, not sliced mid-char.
        assert_eq!(parse_color("#aé"), None);
        assert_eq!(parse_color("#éééééé"), None);
    }

    #[test]
    fn test_color_for_explicit_mapping() {
        let mut mapping = HashMap::new();
        mapping.insert("Alto".to_string(), "red".to_string());
        let palette = ColorPalette::from_mapping(&mapping);
        assert_eq!(palette.color_for("Alto", 0), RGBColor(255, 0, 0));
    }

    #[test]
    fn test_color_for_fallback_on_uncovered_category() {
        let mut mapping = HashMap::new();
        mapping.insert("Alto".to_string(), "red".to_string());
        let palette = ColorPalette::from_mapping(&mapping);
        assert_eq!(palette.color_for("Baixo", 1), DEFAULT_QUALITATIVE[1]);
    }

    #[test]
    fn test_color_for_fallback_cycles() {
        let palette = ColorPalette::default();
        assert_eq!(palette.color_for("x", 9), DEFAULT_QUALITATIVE[1]);
    }

    #[test]
    fn test_from_mapping_ignores_unparseable() {
        let mut mapping = HashMap::new();
        mapping.insert("Alto".to_string(), "not_a_color".to_string());
        let palette = ColorPalette::from_mapping(&mapping);
        assert_eq!(palette.color_for("Alto", 0), DEFAULT_QUALITATIVE[0]);
    }
}
