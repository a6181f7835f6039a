//! Perceptual lightness contrast (APCA-W3 0.0.98G)
//!
//! Unlike the WCAG 2 ratio, APCA is polarity-aware: dark text on a light
//! background yields a positive `Lc`, light text on a dark background a
//! negative one. Text generation always knows which side of the background
//! it is searching on, so the predicate takes the expected [`Polarity`]
//! and rejects a color that is readable only in the other direction.
//!
//! Magnitudes of interest: 90 is preferred body text, 75 is the floor for
//! body text, 60 for large content text.

use crate::color::Srgb;

const MAIN_TRC: f64 = 2.4;

const R_CO: f64 = 0.212_672_9;
const G_CO: f64 = 0.715_152_2;
const B_CO: f64 = 0.072_175_0;

const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_TXT: f64 = 0.62;
const REV_BG: f64 = 0.65;

const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;
const SCALE: f64 = 1.14;
const LO_OFFSET: f64 = 0.027;
const DELTA_Y_MIN: f64 = 0.0005;
const LO_CLIP: f64 = 0.1;

/// Which side of the background the text is expected to sit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Text darker than the background (positive `Lc`).
    DarkOnLight,
    /// Text lighter than the background (negative `Lc`).
    LightOnDark,
}

impl Polarity {
    /// Polarity a text color must have against a background of this
    /// lightness class.
    pub fn for_background(background_is_light: bool) -> Self {
        if background_is_light {
            Polarity::DarkOnLight
        } else {
            Polarity::LightOnDark
        }
    }
}

/// Screen luminance estimate with the APCA soft clamp near black.
fn screen_luminance(color: Srgb) -> f64 {
    let [r, g, b] = color.to_bytes();
    let lin = |c: u8| (f64::from(c) / 255.0).powf(MAIN_TRC);
    let y = R_CO * lin(r) + G_CO * lin(g) + B_CO * lin(b);
    if y > BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// APCA lightness contrast `Lc` of `text` drawn on `background`.
///
/// Roughly -108..=106. Returns 0.0 when the pair is below the noise floor.
///
/// ```
/// use perceptual_color::{apca_contrast, Srgb};
/// let lc = apca_contrast(Srgb::BLACK, Srgb::WHITE);
/// assert!((lc - 106.04).abs() < 0.1);
/// ```
pub fn apca_contrast(text: Srgb, background: Srgb) -> f32 {
    let y_txt = screen_luminance(text);
    let y_bg = screen_luminance(background);

    if (y_bg - y_txt).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    let lc = if y_bg > y_txt {
        let sapc = (y_bg.powf(NORM_BG) - y_txt.powf(NORM_TXT)) * SCALE;
        if sapc < LO_CLIP {
            0.0
        } else {
            sapc - LO_OFFSET
        }
    } else {
        let sapc = (y_bg.powf(REV_BG) - y_txt.powf(REV_TXT)) * SCALE;
        if sapc > -LO_CLIP {
            0.0
        } else {
            sapc + LO_OFFSET
        }
    };

    (lc * 100.0) as f32
}

/// The perceptual contrast predicate: `|Lc| >= min_lc` with the sign
/// dictated by `polarity`.
pub fn meets_contrast(text: Srgb, background: Srgb, min_lc: f32, polarity: Polarity) -> bool {
    let lc = apca_contrast(text, background);
    match polarity {
        Polarity::DarkOnLight => lc >= min_lc,
        Polarity::LightOnDark => lc <= -min_lc,
    }
}
