pub mod color;
pub mod convert;
pub mod error;
pub mod html;
pub mod validator;

pub use color::{CmykColor, Color, ColorModel, ComponentArray, RgbaColor};
pub use convert::{CmykComponents, CmykToRgbMethod, RgbComponents, RgbaComponents};
pub use error::{Result, ValidationError};
