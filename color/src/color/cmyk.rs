use std::fmt;
use std::str::FromStr;

use crate::color::{ColorModel, ComponentArray, RgbaColor};
use crate::convert::{
    cmyk_to_rgb, pack_rgb, rgba_value_to_cmyk_components, CmykComponents, CmykToRgbMethod,
};
use crate::error::{Result, ValidationError};
use crate::html::{format_html, html_to_cmyk_components};
use crate::validator::throw_if_not_cmyk_component;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CmykColor {
    cyan: u8,
    magenta: u8,
    yellow: u8,
    key: u8,
}

impl CmykColor {
    pub fn from_components(cyan: i64, magenta: i64, yellow: i64, key: i64) -> Result<Self> {
        Ok(CmykColor {
            cyan: throw_if_not_cmyk_component(cyan, "cyan")?,
            magenta: throw_if_not_cmyk_component(magenta, "magenta")?,
            yellow: throw_if_not_cmyk_component(yellow, "yellow")?,
            key: throw_if_not_cmyk_component(key, "key")?,
        })
    }

    pub fn from_value(rgb: i64) -> Result<Self> {
        let c = rgba_value_to_cmyk_components(rgb)?;
        Ok(CmykColor::new(c.cyan, c.magenta, c.yellow, c.key))
    }

    pub fn from_html(html: &str) -> Result<Self> {
        let c = html_to_cmyk_components(html)?;
        Ok(CmykColor::new(c.cyan, c.magenta, c.yellow, c.key))
    }

    pub(crate) fn new(cyan: u8, magenta: u8, yellow: u8, key: u8) -> Self {
        CmykColor {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    pub fn cyan(&self) -> u8 {
        self.cyan
    }

    pub fn magenta(&self) -> u8 {
        self.magenta
    }

    pub fn yellow(&self) -> u8 {
        self.yellow
    }

    pub fn key(&self) -> u8 {
        self.key
    }

    pub fn as_rgba_color_with(&self, method: CmykToRgbMethod) -> RgbaColor {
        let rgb = cmyk_to_rgb(method, self.components());
        RgbaColor::new(rgb.red, rgb.green, rgb.blue, RgbaColor::OPAQUE)
    }

    fn components(&self) -> CmykComponents {
        CmykComponents::new(self.cyan, self.magenta, self.yellow, self.key)
    }
}

impl ColorModel for CmykColor {
    fn as_cmyk_color(&self) -> CmykColor {
        *self
    }

    fn as_rgba_color(&self) -> RgbaColor {
        self.as_rgba_color_with(CmykToRgbMethod::Standard)
    }

    fn to_array(&self) -> ComponentArray {
        [
            ("C", self.cyan),
            ("M", self.magenta),
            ("Y", self.yellow),
            ("K", self.key),
        ]
    }

    fn to_html_string(&self) -> String {
        format_html(self.to_rgb_value())
    }

    fn to_css_string(&self) -> String {
        format!(
            "device-cmyk({}, {}, {}, {})",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }

    fn to_rgb_value(&self) -> u32 {
        let rgb = cmyk_to_rgb(CmykToRgbMethod::Standard, self.components());
        pack_rgb(rgb.red, rgb.green, rgb.blue)
    }
}

impl fmt::Display for CmykColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CmykColor [C={}, M={}, Y={}, K={}]",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

impl FromStr for CmykColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        CmykColor::from_html(s)
    }
}
