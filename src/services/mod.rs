pub mod palette_synthesizer;
pub mod passage_segmenter;
pub mod scale_resolver;

pub use palette_synthesizer::{synthesize, synthesize_with, PaletteSynthesizer};
pub use passage_segmenter::{locate_passage, passage_text, segment};
pub use scale_resolver::{apply, resolve, MeasurementBoard, ScaleEvent};
