use serde::{Deserialize, Serialize};

/// One line of lyrics with the part of the highlighted passage it carries.
///
/// Offsets are byte offsets into `line_text`. They fall on `char` boundaries
/// whenever the passage was actually found in the text. `passage_start` is
/// only set on the line where the passage begins and `passage_end` only on
/// the line where it ends; lines in between carry just a
/// `passage_line_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitLine {
    pub line_text: String,
    pub passage_start: Option<usize>,
    pub passage_end: Option<usize>,
    pub passage_line_number: Option<usize>,
}

impl SplitLine {
    /// A line outside the passage.
    pub fn plain(line_text: impl Into<String>) -> Self {
        Self {
            line_text: line_text.into(),
            passage_start: None,
            passage_end: None,
            passage_line_number: None,
        }
    }

    pub fn is_passage(&self) -> bool {
        self.passage_line_number.is_some()
    }

    /// The highlighted part of a passage line; `None` for plain lines.
    pub fn highlighted(&self) -> Option<&str> {
        self.passage_line_number?;
        let start = self.passage_start.unwrap_or(0);
        let end = self.passage_end.unwrap_or(self.line_text.len());
        self.line_text.get(start..end)
    }
}

/// Byte range of the passage inside the full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageSpan {
    pub start: usize,
    pub end: usize,
}

impl PassageSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
