//! Linear RGB color type
//!
//! Linear RGB is proportional to physical light. CIE XYZ (and so CIELAB and
//! every luminance formula in this crate) is defined on linear channels.

use super::lut::srgb_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values are nominally 0.0..=1.0. Converting an out-of-gamut CIELAB color
/// produces channels outside that range; they are clamped only when the
/// color is encoded back to [`Srgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Whether every channel lies inside the displayable 0.0..=1.0 range.
    pub fn in_gamut(self) -> bool {
        const EPS: f32 = 1e-4;
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (-EPS..=1.0 + EPS).contains(c))
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-decode through the lookup table.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
