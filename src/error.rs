use perceptual_color::ParseColorError;
use thiserror::Error;

/// Failure to read a swatch from its `#rrggbb[:weight]` form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SwatchError {
    #[error("Missing swatch color")]
    MissingColor,

    #[error("Invalid swatch color '{input}': {source}")]
    Color {
        input: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Invalid swatch weight '{0}'")]
    Weight(String),
}

/// A scale ladder that cannot drive the fit search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LadderError {
    #[error("Scale ladder must contain at least one preset")]
    Empty,

    #[error("Preset {index} has a non-positive {field}")]
    NonPositive { index: usize, field: &'static str },

    #[error("Preset {index} does not shrink relative to preset {}", .index - 1)]
    NotShrinking { index: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid scale ladder: {0}")]
    Ladder(#[from] LadderError),

    #[error("Invalid palette tuning: {0}")]
    Tuning(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("At least one swatch is required to synthesize a theme")]
    NoSwatches,
}
