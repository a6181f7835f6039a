//! CIELAB (D65, CIE 1931 2° observer)
//!
//! CIELAB is the space lightness adjustments and CIEDE2000 distances are
//! computed in. `L` runs 0..=100, so a "10 unit" lightness step means the
//! same thing here as in design tooling.

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;

const D65_WHITE_POINT: [f32; 3] = [0.95047, 1.0, 1.08883];
const EPSILON: f32 = 216.0 / 24389.0;
const KAPPA: f32 = 24389.0 / 27.0;

/// Lightness bounds of CIELAB.
pub const MIN_LIGHTNESS: f32 = 0.0;
pub const MAX_LIGHTNESS: f32 = 100.0;

/// A color in CIELAB.
///
/// Values are not clamped except for lightness adjustments. Converting a Lab
/// value that lies outside the sRGB gamut back to [`Srgb`] clamps each
/// channel, so the result is the nearest displayable color along the cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Chroma, the distance from the neutral axis.
    #[inline]
    pub fn chroma(self) -> f32 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Same chromaticity, lightness replaced and clamped to 0..=100.
    #[inline]
    pub fn with_lightness(self, l: f32) -> Self {
        Self {
            l: l.clamp(MIN_LIGHTNESS, MAX_LIGHTNESS),
            ..self
        }
    }

    /// Lower lightness by `amount`, clamped at 0.
    ///
    /// ```
    /// use perceptual_color::Lab;
    /// assert_eq!(Lab::new(5.0, 10.0, -3.0).darken(10.0).l, 0.0);
    /// ```
    #[inline]
    pub fn darken(self, amount: f32) -> Self {
        self.with_lightness(self.l - amount)
    }

    /// Raise lightness by `amount`, clamped at 100.
    #[inline]
    pub fn lighten(self, amount: f32) -> Self {
        self.with_lightness(self.l + amount)
    }
}

fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(t: f32) -> f32 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        // Linear sRGB to XYZ
        let x = 0.412_456_4 * rgb.r + 0.357_576_1 * rgb.g + 0.180_437_5 * rgb.b;
        let y = 0.212_672_9 * rgb.r + 0.715_152_2 * rgb.g + 0.072_175_0 * rgb.b;
        let z = 0.019_333_9 * rgb.r + 0.119_192_0 * rgb.g + 0.950_304_1 * rgb.b;

        let fx = lab_f(x / D65_WHITE_POINT[0]);
        let fy = lab_f(y / D65_WHITE_POINT[1]);
        let fz = lab_f(z / D65_WHITE_POINT[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for LinearRgb {
    /// The result is not clamped.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let x = lab_f_inv(fx) * D65_WHITE_POINT[0];
        let y = if lab.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            lab.l / KAPPA
        } * D65_WHITE_POINT[1];
        let z = lab_f_inv(fz) * D65_WHITE_POINT[2];

        LinearRgb {
            r: 3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z,
            g: -0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z,
            b: 0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z,
        }
    }
}

impl From<Srgb> for Lab {
    fn from(srgb: Srgb) -> Self {
        Lab::from(LinearRgb::from(srgb))
    }
}

impl From<Lab> for Srgb {
    fn from(lab: Lab) -> Self {
        Srgb::from(LinearRgb::from(lab))
    }
}
