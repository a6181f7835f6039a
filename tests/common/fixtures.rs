//! Test fixtures and constants.

use versecard::models::{ScaleLadder, ScalePreset, Swatch};

/// Swatch sets as an image extractor would report them, by prominence
pub mod palettes {
    /// Warm album cover: cream, burnt orange, deep brown, olive
    pub const WARM: &[&str] = &["#f2e6c9:0.46", "#c8642a:0.27", "#3b2412:0.18", "#6b6b2e:0.09"];

    /// Night sky: navy, teal, pale yellow
    pub const NIGHT: &[&str] = &["#0b1d3a:0.6", "#1f7a8c:0.3", "#f6e27f:0.1"];

    /// Saturated pop art, all mid-lightness
    pub const POP: &[&str] = &["#e4002b:0.4", "#0057b8:0.3", "#00a651:0.2", "#ff6f00:0.1"];

    /// Nearly monochrome gray photo
    pub const GRAY: &[&str] = &["#7f7f7f:0.7", "#808080:0.2", "#818181:0.1"];

    /// A single flat color
    pub const FLAT: &[&str] = &["#000000"];
}

pub fn swatches(specs: &[&str]) -> Vec<Swatch> {
    specs
        .iter()
        .map(|s| s.parse().expect("fixture swatch"))
        .collect()
}

/// Every palette fixture, for property-style loops
pub fn all_palettes() -> Vec<Vec<Swatch>> {
    [
        palettes::WARM,
        palettes::NIGHT,
        palettes::POP,
        palettes::GRAY,
        palettes::FLAT,
    ]
    .iter()
    .map(|p| swatches(p))
    .collect()
}

/// A ladder whose presets are uniform sizes, largest first
pub fn uniform_ladder(sizes: &[f32]) -> ScaleLadder {
    ScaleLadder::new(
        sizes
            .iter()
            .enumerate()
            .map(|(i, &s)| ScalePreset::uniform(format!("p{i}"), s))
            .collect(),
    )
    .expect("fixture ladder")
}

pub const LYRICS: &str = "\
I walked the line beneath the stars
the river hummed a song of ours
and every light along the bay
was singing that we'd find our way

so hold me close, the night is long
and carry on, and carry on";
