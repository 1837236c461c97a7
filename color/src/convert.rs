use crate::error::Result;
use crate::validator::{
    throw_if_not_cmyk_component, throw_if_not_rgb_value, throw_if_not_rgba_component,
    throw_if_not_rgba_value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbaComponents {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl RgbaComponents {
    pub fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        RgbaComponents {
            red,
            green,
            blue,
            alpha,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbComponents {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbComponents {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        RgbComponents { red, green, blue }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CmykComponents {
    pub cyan: u8,
    pub magenta: u8,
    pub yellow: u8,
    pub key: u8,
}

impl CmykComponents {
    pub fn new(cyan: u8, magenta: u8, yellow: u8, key: u8) -> Self {
        CmykComponents {
            cyan,
            magenta,
            yellow,
            key,
        }
    }
}

/// How device CMYK is mapped back to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CmykToRgbMethod {
    /// `1 - (c * (1 - k) + k)`, the inverse of the RGB to CMYK transform.
    #[default]
    Standard,
    /// `1 - min(1, c + k)`
    Adobe,
}

pub fn rgba_value_to_red_component(rgba: i64) -> Result<u8> {
    let rgba = throw_if_not_rgba_value(rgba)?;
    Ok(((rgba >> 16) & 0xFF) as u8)
}

pub fn rgba_value_to_green_component(rgba: i64) -> Result<u8> {
    let rgba = throw_if_not_rgba_value(rgba)?;
    Ok(((rgba >> 8) & 0xFF) as u8)
}

pub fn rgba_value_to_blue_component(rgba: i64) -> Result<u8> {
    let rgba = throw_if_not_rgba_value(rgba)?;
    Ok((rgba & 0xFF) as u8)
}

/// Raw alpha byte; unlike [`rgba_value_to_rgba_components`] a zero is kept.
pub fn rgba_value_to_alpha_component(rgba: i64) -> Result<u8> {
    let rgba = throw_if_not_rgba_value(rgba)?;
    Ok(((rgba >> 24) & 0xFF) as u8)
}

/// Splits a packed `0xAARRGGBB` value. An alpha byte of zero means the value
/// carried no alpha and decodes as opaque.
pub fn rgba_value_to_rgba_components(rgba: i64) -> Result<RgbaComponents> {
    let rgba = throw_if_not_rgba_value(rgba)?;
    Ok(unpack_rgba(rgba))
}

pub(crate) fn unpack_rgba(rgba: u32) -> RgbaComponents {
    let alpha = match ((rgba >> 24) & 0xFF) as u8 {
        0 => 0xFF,
        a => a,
    };
    RgbaComponents::new(
        ((rgba >> 16) & 0xFF) as u8,
        ((rgba >> 8) & 0xFF) as u8,
        (rgba & 0xFF) as u8,
        alpha,
    )
}

pub fn rgb_components_to_rgb_value(red: i64, green: i64, blue: i64) -> Result<u32> {
    let red = throw_if_not_rgba_component(red, "red")?;
    let green = throw_if_not_rgba_component(green, "green")?;
    let blue = throw_if_not_rgba_component(blue, "blue")?;
    Ok(pack_rgb(red, green, blue))
}

pub(crate) fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

/// Only the 24 bit RGB domain is accepted here.
pub fn rgba_value_to_cmyk_components(rgb: i64) -> Result<CmykComponents> {
    let rgb = throw_if_not_rgb_value(rgb)?;
    let c = unpack_rgba(rgb);
    Ok(rgb_to_cmyk(c.red, c.green, c.blue))
}

pub fn rgb_components_to_cmyk_components(
    red: i64,
    green: i64,
    blue: i64,
) -> Result<CmykComponents> {
    let rgb = rgb_components_to_rgb_value(red, green, blue)?;
    rgba_value_to_cmyk_components(rgb as i64)
}

// Every output is truncated, so general inputs drift on a round trip. Only
// the pure colors come back unchanged.
pub(crate) fn rgb_to_cmyk(red: u8, green: u8, blue: u8) -> CmykComponents {
    if red == 0 && green == 0 && blue == 0 {
        return CmykComponents::new(0, 0, 0, 100);
    }
    let cyan = 1.0 - red as f64 / 255.0;
    let magenta = 1.0 - green as f64 / 255.0;
    let yellow = 1.0 - blue as f64 / 255.0;
    let key = cyan.min(magenta).min(yellow);
    // key < 1 here, at least one channel is lit
    let scale = |v: f64| ((v - key) / (1.0 - key) * 100.0) as u8;
    CmykComponents::new(
        scale(cyan),
        scale(magenta),
        scale(yellow),
        (key * 100.0) as u8,
    )
}

pub fn cmyk_components_to_rgb_components(
    cyan: i64,
    magenta: i64,
    yellow: i64,
    key: i64,
) -> Result<RgbComponents> {
    cmyk_components_to_rgb_components_with(CmykToRgbMethod::Standard, cyan, magenta, yellow, key)
}

pub fn cmyk_components_to_rgb_components_with(
    method: CmykToRgbMethod,
    cyan: i64,
    magenta: i64,
    yellow: i64,
    key: i64,
) -> Result<RgbComponents> {
    let cmyk = CmykComponents::new(
        throw_if_not_cmyk_component(cyan, "cyan")?,
        throw_if_not_cmyk_component(magenta, "magenta")?,
        throw_if_not_cmyk_component(yellow, "yellow")?,
        throw_if_not_cmyk_component(key, "key")?,
    );
    Ok(cmyk_to_rgb(method, cmyk))
}

pub fn cmyk_components_to_rgb_value(
    cyan: i64,
    magenta: i64,
    yellow: i64,
    key: i64,
) -> Result<u32> {
    let rgb = cmyk_components_to_rgb_components(cyan, magenta, yellow, key)?;
    rgb_components_to_rgb_value(rgb.red as i64, rgb.green as i64, rgb.blue as i64)
}

pub(crate) fn cmyk_to_rgb(method: CmykToRgbMethod, cmyk: CmykComponents) -> RgbComponents {
    let key = cmyk.key as f64 / 100.0;
    let channel = |v: u8| {
        let v = v as f64 / 100.0;
        let level = match method {
            CmykToRgbMethod::Standard => 1.0 - (v * (1.0 - key) + key),
            CmykToRgbMethod::Adobe => 1.0 - (v + key).min(1.0),
        };
        // float casts saturate, a level a hair below zero lands on 0
        (level * 255.0) as u8
    };
    RgbComponents::new(
        channel(cmyk.cyan),
        channel(cmyk.magenta),
        channel(cmyk.yellow),
    )
}
