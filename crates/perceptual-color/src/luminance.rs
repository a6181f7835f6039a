//! Weighted luminance and the light/dark split
//!
//! This is the classic Rec. 601 luma on gamma-encoded bytes, not the WCAG
//! relative luminance. It only decides which end of the scale (black or
//! white) a background's primary text color sits on.

use crate::color::Srgb;

/// Backgrounds whose weighted luminance exceeds this take black text.
pub const LIGHT_THRESHOLD: f32 = 155.0;

/// `0.299·R + 0.587·G + 0.114·B` on 0..=255 channels.
pub fn weighted_luminance(color: Srgb) -> f32 {
    let [r, g, b] = color.to_bytes();
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Whether dark text belongs on this color.
///
/// ```
/// use perceptual_color::{is_light, Srgb};
/// assert!(is_light(Srgb::WHITE));
/// assert!(!is_light(Srgb::from_u8(26, 58, 92)));
/// ```
pub fn is_light(color: Srgb) -> bool {
    weighted_luminance(color) > LIGHT_THRESHOLD
}
