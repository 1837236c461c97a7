use std::fmt;

pub mod cmyk;
pub mod rgba;

pub use cmyk::CmykColor;
pub use rgba::RgbaColor;

/// Component names paired with their values, in the model's canonical order.
pub type ComponentArray = [(&'static str, u8); 4];

/// Capabilities shared by every color representation.
pub trait ColorModel: fmt::Display {
    fn as_cmyk_color(&self) -> CmykColor;

    fn as_rgba_color(&self) -> RgbaColor;

    fn to_array(&self) -> ComponentArray;

    /// `#rrggbb`
    fn to_html_string(&self) -> String;

    fn to_css_string(&self) -> String;

    /// Packed `0xRRGGBB`, alpha is dropped.
    fn to_rgb_value(&self) -> u32;

    fn to_debug_string(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Rgba(RgbaColor),
    Cmyk(CmykColor),
}

impl Color {
    pub fn is_rgba(&self) -> bool {
        matches!(self, Color::Rgba(_))
    }

    pub fn is_cmyk(&self) -> bool {
        matches!(self, Color::Cmyk(_))
    }
}

impl From<RgbaColor> for Color {
    fn from(color: RgbaColor) -> Self {
        Color::Rgba(color)
    }
}

impl From<CmykColor> for Color {
    fn from(color: CmykColor) -> Self {
        Color::Cmyk(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgba(c) => fmt::Display::fmt(c, f),
            Color::Cmyk(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl ColorModel for Color {
    fn as_cmyk_color(&self) -> CmykColor {
        match self {
            Color::Rgba(c) => c.as_cmyk_color(),
            Color::Cmyk(c) => c.as_cmyk_color(),
        }
    }

    fn as_rgba_color(&self) -> RgbaColor {
        match self {
            Color::Rgba(c) => c.as_rgba_color(),
            Color::Cmyk(c) => c.as_rgba_color(),
        }
    }

    fn to_array(&self) -> ComponentArray {
        match self {
            Color::Rgba(c) => c.to_array(),
            Color::Cmyk(c) => c.to_array(),
        }
    }

    fn to_html_string(&self) -> String {
        match self {
            Color::Rgba(c) => c.to_html_string(),
            Color::Cmyk(c) => c.to_html_string(),
        }
    }

    fn to_css_string(&self) -> String {
        match self {
            Color::Rgba(c) => c.to_css_string(),
            Color::Cmyk(c) => c.to_css_string(),
        }
    }

    fn to_rgb_value(&self) -> u32 {
        match self {
            Color::Rgba(c) => c.to_rgb_value(),
            Color::Cmyk(c) => c.to_rgb_value(),
        }
    }
}
