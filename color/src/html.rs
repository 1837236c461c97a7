use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::convert::{
    rgba_value_to_cmyk_components, rgba_value_to_rgba_components, CmykComponents, RgbaComponents,
};
use crate::error::{Result, ValidationError};
use crate::validator::{throw_if_not_html_value, throw_if_not_rgb_value};

// CSS 2.1 section 4.3.6 keywords
static RESERVED_COLORS: [(&str, &str); 17] = [
    ("aqua", "#00ffff"),
    ("black", "#000000"),
    ("blue", "#0000ff"),
    ("fuchsia", "#ff00ff"),
    ("gray", "#808080"),
    ("green", "#008000"),
    ("lime", "#00ff00"),
    ("maroon", "#800000"),
    ("navy", "#000080"),
    ("olive", "#808000"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("red", "#ff0000"),
    ("silver", "#c0c0c0"),
    ("teal", "#008080"),
    ("white", "#ffffff"),
    ("yellow", "#ffff00"),
];

lazy_static! {
    static ref NAME_TO_HEX: HashMap<&'static str, &'static str> =
        RESERVED_COLORS.iter().copied().collect();
    static ref HEX_TO_NAME: HashMap<&'static str, &'static str> =
        RESERVED_COLORS.iter().map(|(name, hex)| (*hex, *name)).collect();
}

pub fn name_to_hex(name: &str) -> Option<&'static str> {
    NAME_TO_HEX.get(name).copied()
}

pub fn reserved_names() -> impl Iterator<Item = &'static str> {
    RESERVED_COLORS.iter().map(|(name, _)| *name)
}

/// Renders the low 24 bits as `#rrggbb`. Alpha-carrying values are rejected.
pub fn rgba_value_to_html(rgb: i64) -> Result<String> {
    let rgb = throw_if_not_rgb_value(rgb)?;
    Ok(format_html(rgb))
}

pub(crate) fn format_html(rgb: u32) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        (rgb >> 16) & 0xFF,
        (rgb >> 8) & 0xFF,
        rgb & 0xFF
    )
}

/// Parses a reserved name or a `#` hex token. The digits are read as a single
/// hexadecimal number, so the short form `#f00` yields `0xf00`.
pub fn html_to_rgba_value(html: &str) -> Result<u32> {
    let html = name_to_hex(html).unwrap_or(html);
    let html = throw_if_not_html_value(html)?;
    // at most six validated hex digits, always fits
    let value = u32::from_str_radix(&html[1..], 16)
        .map_err(|_| ValidationError::HtmlValue(html.to_string()))?;
    Ok(value)
}

pub fn html_to_rgba_components(html: &str) -> Result<RgbaComponents> {
    rgba_value_to_rgba_components(html_to_rgba_value(html)? as i64)
}

pub fn html_to_cmyk_components(html: &str) -> Result<CmykComponents> {
    rgba_value_to_cmyk_components(html_to_rgba_value(html)? as i64)
}

/// Reverse lookup of the reserved keyword table.
pub fn rgb_value_to_html_name(rgb: i64) -> Result<Option<&'static str>> {
    let html = rgba_value_to_html(rgb)?;
    Ok(HEX_TO_NAME.get(html.as_str()).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_value_to_html() {
        assert_eq!(rgba_value_to_html(0x000000).unwrap(), "#000000");
        assert_eq!(rgba_value_to_html(0xFFFFFF).unwrap(), "#ffffff");
        assert_eq!(rgba_value_to_html(0xFF0000).unwrap(), "#ff0000");
        assert_eq!(rgba_value_to_html(0x000001).unwrap(), "#000001");
        assert_eq!(rgba_value_to_html(0xFFA500).unwrap(), "#ffa500");
        assert!(rgba_value_to_html(0xFF000000).is_err());
        assert!(rgba_value_to_html(-1).is_err());
    }

    #[test]
    fn test_html_to_rgba_value() {
        assert_eq!(html_to_rgba_value("#000000").unwrap(), 0x000000);
        assert_eq!(html_to_rgba_value("#ffffff").unwrap(), 0xFFFFFF);
        assert_eq!(html_to_rgba_value("#00FF00").unwrap(), 0x00FF00);
        assert_eq!(html_to_rgba_value("black").unwrap(), 0x000000);
        assert_eq!(html_to_rgba_value("red").unwrap(), 0xFF0000);
        assert_eq!(html_to_rgba_value("lime").unwrap(), 0x00FF00);
        assert_eq!(html_to_rgba_value("orange").unwrap(), 0xFFA500);
        assert_eq!(html_to_rgba_value("#f00").unwrap(), 0xF00);
        assert!(html_to_rgba_value("").is_err());
        assert!(html_to_rgba_value("Red").is_err());
        assert!(html_to_rgba_value("#gggggg").is_err());
    }

    #[test]
    fn test_every_name_resolves() {
        for name in reserved_names() {
            let value = html_to_rgba_value(name).unwrap();
            assert_eq!(rgb_value_to_html_name(value as i64).unwrap(), Some(name));
        }
        assert_eq!(reserved_names().count(), 17);
        assert_eq!(rgb_value_to_html_name(0x123456).unwrap(), None);
    }

    #[test]
    fn test_html_to_components() {
        let rgba = html_to_rgba_components("#ff0000").unwrap();
        assert_eq!(rgba, RgbaComponents::new(0xFF, 0, 0, 0xFF));
        let cmyk = html_to_cmyk_components("#0000ff").unwrap();
        assert_eq!(cmyk, CmykComponents::new(100, 100, 0, 0));
    }
}
