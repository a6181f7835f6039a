//! Assertion helpers for tests.

use perceptual_color::{apca_contrast, distance, is_light, Srgb};
use pretty_assertions::assert_eq;
use versecard::models::{PaletteTuning, SplitLine, Theme};

/// Assert the text colors of one theme variant are readable and distinct
pub fn assert_readable(theme: &Theme, tuning: &PaletteTuning) {
    let expected_primary = if is_light(theme.background_color) {
        Srgb::BLACK
    } else {
        Srgb::WHITE
    };
    assert_eq!(
        theme.text_colors.first().copied(),
        Some(expected_primary),
        "Primary text color on {}",
        theme.background_color
    );
    assert!(
        theme.text_colors.len() <= tuning.max_text_colors,
        "Too many text colors: {:?}",
        theme.text_colors
    );

    for color in theme.accent_text_colors() {
        let lc = apca_contrast(*color, theme.background_color);
        assert!(
            lc.abs() >= tuning.min_contrast,
            "{color} on {} has Lc {lc}",
            theme.background_color
        );
    }

    for (i, a) in theme.text_colors.iter().enumerate() {
        for b in &theme.text_colors[i + 1..] {
            let d = distance(*a, *b);
            assert!(d > tuning.dedupe_distance, "{a} and {b} are only {d} apart");
        }
    }
}

/// Assert joining the lines reproduces the full text
pub fn assert_round_trip(lines: &[SplitLine], full_text: &str) {
    let joined = lines
        .iter()
        .map(|l| l.line_text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(joined, full_text);
}

/// Assert passage line numbers run 0, 1, 2... without gaps
pub fn assert_contiguous_passage(lines: &[SplitLine]) {
    let numbers: Vec<usize> = lines.iter().filter_map(|l| l.passage_line_number).collect();
    let expected: Vec<usize> = (0..numbers.len()).collect();
    assert_eq!(numbers, expected);

    let first = lines.iter().position(SplitLine::is_passage);
    let last = lines.iter().rposition(SplitLine::is_passage);
    if let (Some(first), Some(last)) = (first, last) {
        assert!(lines[first..=last].iter().all(SplitLine::is_passage));
    }
}
