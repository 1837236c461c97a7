use std::fmt;
use std::str::FromStr;

use crate::color::{CmykColor, ColorModel, ComponentArray};
use crate::convert::{pack_rgb, rgb_to_cmyk, rgba_value_to_rgba_components};
use crate::error::{Result, ValidationError};
use crate::html::{format_html, html_to_rgba_components};
use crate::validator::{throw_if_not_rgb_value, throw_if_not_rgba_component};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

impl RgbaColor {
    pub const OPAQUE: u8 = 0xFF;

    pub fn from_components(red: i64, green: i64, blue: i64, alpha: i64) -> Result<Self> {
        Ok(RgbaColor {
            red: throw_if_not_rgba_component(red, "red")?,
            green: throw_if_not_rgba_component(green, "green")?,
            blue: throw_if_not_rgba_component(blue, "blue")?,
            alpha: throw_if_not_rgba_component(alpha, "alpha")?,
        })
    }

    pub fn from_rgb_components(red: i64, green: i64, blue: i64) -> Result<Self> {
        Self::from_components(red, green, blue, Self::OPAQUE as i64)
    }

    /// Decodes a packed `0xRRGGBB` value; the color is opaque.
    pub fn from_value(rgb: i64) -> Result<Self> {
        let rgb = throw_if_not_rgb_value(rgb)?;
        let c = rgba_value_to_rgba_components(rgb as i64)?;
        Ok(RgbaColor::new(c.red, c.green, c.blue, Self::OPAQUE))
    }

    /// Decodes a packed `0xAARRGGBB` value keeping its alpha. A zero alpha
    /// byte reads as opaque.
    pub fn from_rgba_value(rgba: i64) -> Result<Self> {
        let c = rgba_value_to_rgba_components(rgba)?;
        Ok(RgbaColor::new(c.red, c.green, c.blue, c.alpha))
    }

    pub fn from_html(html: &str) -> Result<Self> {
        let c = html_to_rgba_components(html)?;
        Ok(RgbaColor::new(c.red, c.green, c.blue, Self::OPAQUE))
    }

    pub(crate) fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        RgbaColor {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }
}

impl ColorModel for RgbaColor {
    fn as_cmyk_color(&self) -> CmykColor {
        let c = rgb_to_cmyk(self.red, self.green, self.blue);
        CmykColor::new(c.cyan, c.magenta, c.yellow, c.key)
    }

    fn as_rgba_color(&self) -> RgbaColor {
        *self
    }

    fn to_array(&self) -> ComponentArray {
        [
            ("R", self.red),
            ("G", self.green),
            ("B", self.blue),
            ("A", self.alpha),
        ]
    }

    fn to_html_string(&self) -> String {
        format_html(self.to_rgb_value())
    }

    fn to_css_string(&self) -> String {
        // two decimals, printed without trailing zeros
        let alpha = (self.alpha as f64 / 255.0 * 100.0).round() / 100.0;
        format!(
            "rgba({}, {}, {}, {})",
            self.red, self.green, self.blue, alpha
        )
    }

    fn to_rgb_value(&self) -> u32 {
        pack_rgb(self.red, self.green, self.blue)
    }
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RgbaColor [R={}, G={}, B={}, A={}]",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl FromStr for RgbaColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        RgbaColor::from_html(s)
    }
}
