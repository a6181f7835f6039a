use crate::models::{PassageSpan, SplitLine};

/// Byte span of the first occurrence of `excerpt`, or `None` if absent.
pub fn locate_passage(full_text: &str, excerpt: &str) -> Option<PassageSpan> {
    full_text.find(excerpt).map(|start| PassageSpan {
        start,
        end: start + excerpt.len(),
    })
}

/// Split `full_text` on `'\n'` and mark where the passage `excerpt` falls.
///
/// Never fails. When the excerpt is absent the passage is taken to start at
/// -1 and end at `excerpt.len() - 1`, which highlights a prefix of the first
/// line; use [`locate_passage`] to tell that case apart.
pub fn segment(full_text: &str, excerpt: &str) -> Vec<SplitLine> {
    let (start, end) = match locate_passage(full_text, excerpt) {
        Some(span) => (span.start as isize, span.end as isize),
        None => {
            tracing::debug!(excerpt_len = excerpt.len(), "Excerpt not found in text");
            (-1, excerpt.len() as isize - 1)
        }
    };

    let mut lines = Vec::new();
    let mut offset: isize = 0;
    let mut line_number = 0;

    for line in full_text.split('\n') {
        let line_end = offset + line.len() as isize;
        let begins_here = (offset..=line_end).contains(&start);
        let mut split = SplitLine::plain(line);

        if begins_here || (start..=end).contains(&offset) {
            if begins_here {
                split.passage_start = Some((start - offset) as usize);
            }
            if (offset..=line_end).contains(&end) {
                split.passage_end = Some((end - offset) as usize);
            }
            split.passage_line_number = Some(line_number);
            line_number += 1;
        }

        lines.push(split);
        offset = line_end + 1;
    }

    tracing::trace!(lines = lines.len(), passage_lines = line_number, "Segmented text");
    lines
}

/// Rejoin the highlighted slices of the passage lines with `'\n'`.
///
/// `None` when no line is in the passage or a bound does not fall on a
/// character boundary.
pub fn passage_text(lines: &[SplitLine]) -> Option<String> {
    let parts: Vec<&str> = lines
        .iter()
        .filter(|line| line.is_passage())
        .map(SplitLine::highlighted)
        .collect::<Option<_>>()?;

    if parts.is_empty() {
        return None;
    }
    Some(parts.join("\n"))
}
