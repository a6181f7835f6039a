//! CIEDE2000 color difference
//!
//! The metric itself comes from the `deltae` crate (kL = kC = kH = 1). A
//! difference of about 2.3 is a just-noticeable difference; the text-color
//! deduplication works at 15.

use crate::color::{Lab, Srgb};
use deltae::{DEMethod, DeltaE, LabValue};

impl From<Lab> for LabValue {
    fn from(lab: Lab) -> Self {
        LabValue {
            l: lab.l,
            a: lab.a,
            b: lab.b,
        }
    }
}

/// CIEDE2000 distance between two CIELAB colors. Symmetric, zero for
/// identical inputs.
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f32 {
    *DeltaE::new(LabValue::from(lab1), LabValue::from(lab2), DEMethod::DE2000).value()
}

/// CIEDE2000 distance between two sRGB colors.
///
/// ```
/// use perceptual_color::{distance, Srgb};
/// assert_eq!(distance(Srgb::WHITE, Srgb::WHITE), 0.0);
/// assert!(distance(Srgb::BLACK, Srgb::WHITE) > 99.0);
/// ```
pub fn distance(a: Srgb, b: Srgb) -> f32 {
    ciede2000(Lab::from(a), Lab::from(b))
}
