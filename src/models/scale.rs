use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LadderError;

/// One rung of the display-size ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalePreset {
    pub name: String,
    pub text_size: f32,
    pub line_height: f32,
    pub image_size: f32,
    pub padding: f32,
}

impl ScalePreset {
    pub fn new(
        name: impl Into<String>,
        text_size: f32,
        line_height: f32,
        image_size: f32,
        padding: f32,
    ) -> Self {
        Self {
            name: name.into(),
            text_size,
            line_height,
            image_size,
            padding,
        }
    }

    /// A preset whose every size field equals `size`.
    pub fn uniform(name: impl Into<String>, size: f32) -> Self {
        Self::new(name, size, size, size, size)
    }

    fn fields(&self) -> [(&'static str, f32); 4] {
        [
            ("text_size", self.text_size),
            ("line_height", self.line_height),
            ("image_size", self.image_size),
            ("padding", self.padding),
        ]
    }
}

/// Ordered presets, largest first.
///
/// Validated on construction: non-empty, all sizes positive, and each preset
/// no larger than its predecessor in any field while strictly smaller in at
/// least one. Advancing an index therefore always shrinks the content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScalePreset>", into = "Vec<ScalePreset>")]
pub struct ScaleLadder(Vec<ScalePreset>);

impl ScaleLadder {
    pub fn new(presets: Vec<ScalePreset>) -> Result<Self, LadderError> {
        if presets.is_empty() {
            return Err(LadderError::Empty);
        }

        for (index, preset) in presets.iter().enumerate() {
            // NaN fails this comparison too.
            if let Some((field, _)) = preset.fields().into_iter().find(|(_, v)| !(*v > 0.0)) {
                return Err(LadderError::NonPositive { index, field });
            }
        }

        for (index, pair) in presets.windows(2).enumerate() {
            let (prev, next) = (pair[0].fields(), pair[1].fields());
            let grows = prev.iter().zip(&next).any(|((_, p), (_, n))| n > p);
            let shrinks = prev.iter().zip(&next).any(|((_, p), (_, n))| n < p);
            if grows || !shrinks {
                return Err(LadderError::NotShrinking { index: index + 1 });
            }
        }

        Ok(Self(presets))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; empty ladders are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the smallest preset.
    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&ScalePreset> {
        self.0.get(index)
    }

    /// The preset at `index`, or the smallest one when out of range.
    pub fn preset(&self, index: usize) -> &ScalePreset {
        let index = index.min(self.last_index());
        &self.0[index]
    }

    pub fn presets(&self) -> &[ScalePreset] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScalePreset> {
        self.0.iter()
    }
}

impl Default for ScaleLadder {
    fn default() -> Self {
        Self(vec![
            ScalePreset::new("large", 28.0, 36.0, 96.0, 24.0),
            ScalePreset::new("medium", 24.0, 31.0, 80.0, 20.0),
            ScalePreset::new("small", 20.0, 26.0, 64.0, 16.0),
            ScalePreset::new("compact", 17.0, 22.0, 52.0, 12.0),
            ScalePreset::new("tiny", 14.0, 18.0, 40.0, 8.0),
        ])
    }
}

impl TryFrom<Vec<ScalePreset>> for ScaleLadder {
    type Error = LadderError;

    fn try_from(presets: Vec<ScalePreset>) -> Result<Self, Self::Error> {
        Self::new(presets)
    }
}

impl From<ScaleLadder> for Vec<ScalePreset> {
    fn from(ladder: ScaleLadder) -> Self {
        ladder.0
    }
}

impl<'a> IntoIterator for &'a ScaleLadder {
    type Item = &'a ScalePreset;
    type IntoIter = std::slice::Iter<'a, ScalePreset>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Identity of a piece of rendered content (a lyric card).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A display context whose height budget is shared by all its content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextId(String);

impl ContextId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasurementKey {
    pub content: ContentId,
    pub context: ContextId,
}

impl MeasurementKey {
    pub fn new(content: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            content: ContentId::new(content),
            context: ContextId::new(context),
        }
    }
}

impl fmt::Display for MeasurementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.content, self.context)
    }
}

/// Fit-search state for one (content, context) pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Measurement {
    pub scale_index: usize,
    pub scale_finalized: bool,
    pub content_height: Option<f32>,
    pub anchor_position: Option<f32>,
}
