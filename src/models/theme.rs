use perceptual_color::{is_light, Srgb};
use serde::{Deserialize, Serialize};

/// Presentation colors derived from an image's swatches.
///
/// `text_colors[0]` is always pure black or pure white, picked by the
/// background's lightness; later entries are swatch-derived colors that
/// read against `background_color`. Alternates are one level deep: an
/// alternate theme carries an inverted variant but no alternates of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub background_color: Srgb,
    pub far_background_color: Srgb,
    pub text_colors: Vec<Srgb>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternate_themes: Vec<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inverted_theme: Option<Box<Theme>>,
}

impl Theme {
    /// The black-or-white text color.
    pub fn primary_text_color(&self) -> Srgb {
        self.text_colors.first().copied().unwrap_or(Srgb::WHITE)
    }

    /// Swatch-derived text colors, excluding the primary one.
    pub fn accent_text_colors(&self) -> &[Srgb] {
        self.text_colors.get(1..).unwrap_or(&[])
    }

    pub fn inverted(&self) -> Option<&Theme> {
        self.inverted_theme.as_deref()
    }

    /// Whether the background takes dark text.
    pub fn is_light(&self) -> bool {
        is_light(self.background_color)
    }

    /// This theme, its inverted variant, then each alternate followed by its
    /// inverted variant.
    pub fn variants(&self) -> Vec<&Theme> {
        let mut out = vec![self];
        out.extend(self.inverted());
        for alt in &self.alternate_themes {
            out.push(alt);
            out.extend(alt.inverted());
        }
        out
    }
}
