use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The {name} CMYK component value is less than 0 or greater than 100, got:{value}")]
    CmykComponent { name: &'static str, value: i64 },

    #[error("The {name} RGB(A) component color is less than 0x00 or greater than 0xFF, got:{value}")]
    RgbaComponent { name: &'static str, value: i64 },

    #[error("The RGB color value is less than 0x0 or greater than 0xFFFFFF, got:{0:#x}")]
    RgbValue(i64),

    #[error("The RGBA color value is less than 0x0 or greater than 0xFFFFFFFF, got:{0:#x}")]
    RgbaValue(i64),

    #[error("The HTML color value is invalid: '{0}'")]
    HtmlValue(String),
}

impl ValidationError {
    /// Name of the rejected component, or of the packed/textual form.
    pub fn component(&self) -> &str {
        match self {
            ValidationError::CmykComponent { name, .. } => name,
            ValidationError::RgbaComponent { name, .. } => name,
            ValidationError::RgbValue(_) => "rgb",
            ValidationError::RgbaValue(_) => "rgba",
            ValidationError::HtmlValue(_) => "html",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
