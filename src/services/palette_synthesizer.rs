use perceptual_color::{
    distance, is_light, meets_contrast, Lab, Polarity, Srgb, MAX_LIGHTNESS, MIN_LIGHTNESS,
};

use crate::error::SynthesisError;
use crate::models::{PaletteTuning, Swatch, Theme};

/// CIELAB lightness from which a background counts as light.
const LIGHT_LAB_L: f32 = 50.0;
/// Both chroma axes beyond this make a background saturated.
const SATURATED_AXIS: f32 = 30.0;
/// Saturated backgrounds at or below this lightness are still lightened.
const NEAR_BLACK_L: f32 = 20.0;
/// Swatches past this many are ignored.
pub const MAX_SWATCHES: usize = 4;

/// Derives accessible themes from extracted image swatches.
#[derive(Debug, Clone, Default)]
pub struct PaletteSynthesizer {
    tuning: PaletteTuning,
}

impl PaletteSynthesizer {
    pub fn new(tuning: PaletteTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &PaletteTuning {
        &self.tuning
    }

    /// Build the theme for `swatches`, ordered by descending prominence.
    ///
    /// The first swatch is the dominant color; the rest become alternates.
    /// Only the first four swatches are considered.
    pub fn synthesize(&self, swatches: &[Swatch]) -> Result<Theme, SynthesisError> {
        let colors: Vec<Srgb> = swatches
            .iter()
            .take(MAX_SWATCHES)
            .map(|s| s.color)
            .collect();
        let Some((&dominant, rest)) = colors.split_first() else {
            return Err(SynthesisError::NoSwatches);
        };
        if swatches.len() > MAX_SWATCHES {
            tracing::debug!(
                ignored = swatches.len() - MAX_SWATCHES,
                "Ignoring swatches beyond the fourth"
            );
        }

        let alternates: Vec<Theme> = (1..colors.len())
            .map(|index| {
                let others: Vec<Srgb> = colors
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != index)
                    .map(|(_, &c)| c)
                    .collect();
                self.variant_pair(colors[index], &others)
            })
            .collect();

        let mut theme = self.variant_pair(dominant, rest);
        if let Some(inverted) = theme.inverted_theme.as_deref_mut() {
            inverted.alternate_themes = alternates.clone();
        }
        theme.alternate_themes = alternates;

        tracing::debug!(
            background = %theme.background_color,
            text_colors = theme.text_colors.len(),
            alternates = theme.alternate_themes.len(),
            "Synthesized theme"
        );
        Ok(theme)
    }

    /// A normal theme with its inverted counterpart linked.
    fn variant_pair(&self, background: Srgb, foregrounds: &[Srgb]) -> Theme {
        let inverted = self.base_theme(background, foregrounds, true);
        let mut theme = self.base_theme(background, foregrounds, false);
        theme.inverted_theme = Some(Box::new(inverted));
        theme
    }

    /// One theme variant with no alternates and no inversion link.
    ///
    /// Normally the swatch is the background and its contrast counterpart the
    /// far background; `invert` swaps the two.
    pub fn base_theme(&self, swatch: Srgb, foregrounds: &[Srgb], invert: bool) -> Theme {
        let contrast = self.contrast_background(swatch);
        let (background_color, far_background_color) = if invert {
            (contrast, swatch)
        } else {
            (swatch, contrast)
        };

        Theme {
            background_color,
            far_background_color,
            text_colors: self.text_colors(background_color, foregrounds),
            alternate_themes: Vec::new(),
            inverted_theme: None,
        }
    }

    /// A second background one lightness step away from `color`.
    ///
    /// Light colors and strongly saturated colors that are not near black are
    /// darkened; everything else is lightened.
    pub fn contrast_background(&self, color: Srgb) -> Srgb {
        let lab = Lab::from(color);
        let saturated = lab.a.abs() > SATURATED_AXIS && lab.b.abs() > SATURATED_AXIS;
        let adjusted = if lab.l >= LIGHT_LAB_L || (saturated && lab.l > NEAR_BLACK_L) {
            lab.darken(self.tuning.background_step)
        } else {
            lab.lighten(self.tuning.background_step)
        };
        Srgb::from(adjusted).quantize()
    }

    /// Readable text colors for `background`, black or white first.
    ///
    /// Candidates are the foregrounds followed by the background itself. Each
    /// is pushed away from the background until it meets the contrast
    /// threshold, dropped if it never does, then near-duplicates are removed.
    pub fn text_colors(&self, background: Srgb, foregrounds: &[Srgb]) -> Vec<Srgb> {
        let light = is_light(background);
        let polarity = Polarity::for_background(light);
        let primary = if light { Srgb::BLACK } else { Srgb::WHITE };

        let mut colors = vec![primary];
        for &candidate in foregrounds.iter().chain(std::iter::once(&background)) {
            let Some(found) = self.search_readable(candidate, background, polarity) else {
                tracing::debug!(
                    candidate = %candidate,
                    background = %background,
                    "No readable lightness for text candidate, dropping"
                );
                continue;
            };

            match colors
                .iter()
                .find(|kept| distance(**kept, found) <= self.tuning.dedupe_distance)
                .copied()
            {
                Some(kept) => {
                    tracing::trace!(
                        color = %found,
                        near = %kept,
                        "Dropping near-duplicate text color"
                    )
                }
                None => colors.push(found),
            }
        }

        colors.truncate(self.tuning.max_text_colors);
        colors
    }

    /// Step lightness away from the background until the contrast holds.
    fn search_readable(
        &self,
        candidate: Srgb,
        background: Srgb,
        polarity: Polarity,
    ) -> Option<Srgb> {
        let step = self.tuning.lightness_step;
        if !(step.is_finite() && step > 0.0) {
            tracing::warn!(step, "Lightness step must be positive, skipping search");
            return None;
        }

        let lab = Lab::from(candidate);
        let start = lab.l.clamp(MIN_LIGHTNESS, MAX_LIGHTNESS);
        let (direction, room) = match polarity {
            Polarity::DarkOnLight => (-1.0, start - MIN_LIGHTNESS),
            Polarity::LightOnDark => (1.0, MAX_LIGHTNESS - start),
        };
        let steps = (room / step).floor() as u32;

        for i in 0..=steps {
            let l = start + direction * step * i as f32;
            let color = Srgb::from(lab.with_lightness(l)).quantize();
            if meets_contrast(color, background, self.tuning.min_contrast, polarity) {
                tracing::trace!(
                    candidate = %candidate,
                    found = %color,
                    lightness = l,
                    "Text color found"
                );
                return Some(color);
            }
        }
        None
    }
}

/// Synthesize with the default tuning.
pub fn synthesize(swatches: &[Swatch]) -> Result<Theme, SynthesisError> {
    PaletteSynthesizer::default().synthesize(swatches)
}

/// Synthesize with explicit tuning, e.g. loaded from config.
pub fn synthesize_with(
    swatches: &[Swatch],
    tuning: &PaletteTuning,
) -> Result<Theme, SynthesisError> {
    PaletteSynthesizer::new(*tuning).synthesize(swatches)
}
