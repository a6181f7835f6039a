//! Color types and conversions
//!
//! - [`Srgb`]: gamma-encoded input/output, parsed from and printed as hex
//! - [`LinearRgb`]: linear light, the basis of XYZ and luminance
//! - [`Lab`]: CIELAB, for lightness adjustment and CIEDE2000 distance
//!
//! ```
//! use perceptual_color::{Lab, Srgb};
//!
//! let swatch: Srgb = "#1a3a5c".parse().unwrap();
//! let lighter = Srgb::from(Lab::from(swatch).lighten(10.0));
//! assert!(Lab::from(lighter).l > Lab::from(swatch).l);
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod srgb;

pub use lab::{Lab, MAX_LIGHTNESS, MIN_LIGHTNESS};
pub use linear_rgb::LinearRgb;
pub use srgb::Srgb;
