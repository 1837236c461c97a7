use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::{Result, ValidationError};
use crate::html;

pub const CMYK_COMPONENT_MAX: i64 = 100;
pub const RGBA_COMPONENT_MAX: i64 = 0xFF;
pub const RGB_VALUE_MAX: i64 = 0xFF_FFFF;
pub const RGBA_VALUE_MAX: i64 = 0xFFFF_FFFF;

lazy_static! {
    // three groups of one or two hex digits, so "#f00" and "#1234" pass too
    static ref HTML_VALUE: Regex = Regex::new(r"^#(?:[0-9a-fA-F]{1,2}){3}$").unwrap();
}

pub fn is_valid_cmyk_component(value: i64) -> bool {
    (0..=CMYK_COMPONENT_MAX).contains(&value)
}

pub fn is_valid_rgba_component(value: i64) -> bool {
    (0..=RGBA_COMPONENT_MAX).contains(&value)
}

pub fn is_valid_rgb_value(value: i64) -> bool {
    (0..=RGB_VALUE_MAX).contains(&value)
}

pub fn is_valid_rgba_value(value: i64) -> bool {
    (0..=RGBA_VALUE_MAX).contains(&value)
}

pub fn is_valid_html_value(value: &str) -> bool {
    HTML_VALUE.is_match(value)
}

/// Only the lowercase CSS Level 1 keywords are accepted.
pub fn is_valid_html_name(value: &str) -> bool {
    html::name_to_hex(value).is_some()
}

pub fn is_valid_html(value: &str) -> bool {
    is_valid_html_name(value) || is_valid_html_value(value)
}

pub fn throw_if_not_cmyk_component(value: i64, name: &'static str) -> Result<u8> {
    if !is_valid_cmyk_component(value) {
        debug!("reject cmyk component {}:{}", name, value);
        return Err(ValidationError::CmykComponent { name, value });
    }
    Ok(value as u8)
}

pub fn throw_if_not_rgba_component(value: i64, name: &'static str) -> Result<u8> {
    if !is_valid_rgba_component(value) {
        debug!("reject rgba component {}:{}", name, value);
        return Err(ValidationError::RgbaComponent { name, value });
    }
    Ok(value as u8)
}

pub fn throw_if_not_rgb_value(value: i64) -> Result<u32> {
    if !is_valid_rgb_value(value) {
        debug!("reject rgb value:{:#x}", value);
        return Err(ValidationError::RgbValue(value));
    }
    Ok(value as u32)
}

pub fn throw_if_not_rgba_value(value: i64) -> Result<u32> {
    if !is_valid_rgba_value(value) {
        debug!("reject rgba value:{:#x}", value);
        return Err(ValidationError::RgbaValue(value));
    }
    Ok(value as u32)
}

pub fn throw_if_not_html_value(value: &str) -> Result<&str> {
    if !is_valid_html_value(value) {
        debug!("reject html value:{:?}", value);
        return Err(ValidationError::HtmlValue(value.to_string()));
    }
    Ok(value)
}
