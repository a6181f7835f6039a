pub mod config;
pub mod scale;
pub mod split_line;
pub mod swatch;
pub mod theme;

pub use config::{AppConfig, PaletteTuning};
pub use scale::{ContentId, ContextId, Measurement, MeasurementKey, ScaleLadder, ScalePreset};
pub use split_line::{PassageSpan, SplitLine};
pub use swatch::Swatch;
pub use theme::Theme;
