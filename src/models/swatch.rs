use perceptual_color::Srgb;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SwatchError;

/// A color extracted from an image, weighted by the share of the image it covers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swatch {
    pub color: Srgb,
    #[serde(default = "default_weight")]
    pub weight: f32,
}

fn default_weight() -> f32 {
    1.0
}

impl Swatch {
    pub fn new(color: Srgb, weight: f32) -> Self {
        Self { color, weight }
    }

    /// Sort swatches most prominent first.
    ///
    /// The sort is stable, so swatches of equal weight keep the extractor's
    /// order and synthesis stays deterministic.
    pub fn sort_by_prominence(swatches: &mut [Swatch]) {
        swatches.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
    }
}

impl FromStr for Swatch {
    type Err = SwatchError;

    /// Parse `#rrggbb`, `#rgb`, or either followed by `:weight`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (color, weight) = match s.split_once(':') {
            Some((color, weight)) => (color.trim(), Some(weight.trim())),
            None => (s, None),
        };

        if color.is_empty() {
            return Err(SwatchError::MissingColor);
        }

        let parsed = color.parse::<Srgb>().map_err(|source| SwatchError::Color {
            input: color.to_string(),
            source,
        })?;

        let weight = match weight {
            Some(raw) => match raw.parse::<f32>() {
                Ok(w) if w.is_finite() && w >= 0.0 => w,
                _ => return Err(SwatchError::Weight(raw.to_string())),
            },
            None => default_weight(),
        };

        Ok(Self::new(parsed, weight))
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.color, self.weight)
    }
}
