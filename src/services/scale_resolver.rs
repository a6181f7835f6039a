use std::collections::HashMap;

use crate::models::{ContextId, Measurement, MeasurementKey, ScaleLadder, ScalePreset};

/// An observation about one piece of content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleEvent {
    /// Rendered height of the content. `measured_at` is the scale index the
    /// layout was rendered with, when the measurer knows it.
    ContentHeight {
        height: f32,
        measured_at: Option<usize>,
    },
    /// Vertical offset of the content, kept for scroll alignment.
    Anchor { position: f32 },
}

/// Fit-search transition for one measurement.
///
/// With both heights known and the content overflowing, step one preset
/// smaller and discard the stale layout, or finalize at the smallest preset.
/// With both known and the content fitting, finalize. Otherwise unchanged.
pub fn resolve(
    measurement: Measurement,
    max_height: Option<f32>,
    last_index: usize,
) -> Measurement {
    let (Some(content), Some(max)) = (measurement.content_height, max_height) else {
        return measurement;
    };

    if content > max {
        if measurement.scale_index < last_index {
            return Measurement {
                scale_index: measurement.scale_index + 1,
                scale_finalized: false,
                content_height: None,
                anchor_position: None,
            };
        }
        return Measurement {
            scale_finalized: true,
            ..measurement
        };
    }

    if !measurement.scale_finalized {
        return Measurement {
            scale_finalized: true,
            ..measurement
        };
    }
    measurement
}

/// Apply one event to a (possibly not yet created) measurement.
pub fn apply(
    previous: Option<Measurement>,
    event: &ScaleEvent,
    max_height: Option<f32>,
    ladder: &ScaleLadder,
) -> Measurement {
    let mut measurement = previous.unwrap_or_default();

    match *event {
        ScaleEvent::ContentHeight {
            height,
            measured_at,
        } => {
            if !height.is_finite() {
                tracing::warn!(height, "Ignoring non-finite content height");
                return measurement;
            }
            if let Some(at) = measured_at {
                if at != measurement.scale_index {
                    tracing::debug!(
                        measured_at = at,
                        scale_index = measurement.scale_index,
                        "Ignoring height measured at a stale scale"
                    );
                    return measurement;
                }
            }
            measurement.content_height = Some(height);
            resolve(measurement, max_height, ladder.last_index())
        }
        ScaleEvent::Anchor { position } => {
            measurement.anchor_position = Some(position);
            measurement
        }
    }
}

/// Caller-owned store of fit-search state, keyed by content and context.
///
/// Measurements are created on their first event. Height budgets are shared
/// by every measurement in the same context.
#[derive(Debug, Clone, Default)]
pub struct MeasurementBoard {
    ladder: ScaleLadder,
    measurements: HashMap<MeasurementKey, Measurement>,
    budgets: HashMap<ContextId, f32>,
}

impl MeasurementBoard {
    pub fn new(ladder: ScaleLadder) -> Self {
        Self {
            ladder,
            measurements: HashMap::new(),
            budgets: HashMap::new(),
        }
    }

    pub fn ladder(&self) -> &ScaleLadder {
        &self.ladder
    }

    /// Record a height measured at the key's current scale.
    pub fn report_content_height(&mut self, key: &MeasurementKey, height: f32) -> Measurement {
        self.dispatch(
            key,
            ScaleEvent::ContentHeight {
                height,
                measured_at: None,
            },
        )
    }

    /// Record a height measured at `scale_index`; ignored if the key has
    /// already moved past that scale.
    pub fn report_content_height_at(
        &mut self,
        key: &MeasurementKey,
        height: f32,
        scale_index: usize,
    ) -> Measurement {
        self.dispatch(
            key,
            ScaleEvent::ContentHeight {
                height,
                measured_at: Some(scale_index),
            },
        )
    }

    pub fn report_anchor(&mut self, key: &MeasurementKey, position: f32) -> Measurement {
        self.dispatch(key, ScaleEvent::Anchor { position })
    }

    /// Set the height budget of `context` and re-resolve its unfinalized
    /// measurements. Finalized ones are left alone.
    ///
    /// Returns how many measurements were re-resolved.
    pub fn report_max_height(&mut self, context: &ContextId, max_height: f32) -> usize {
        if !max_height.is_finite() {
            tracing::warn!(%context, max_height, "Ignoring non-finite max height");
            return 0;
        }
        self.budgets.insert(context.clone(), max_height);

        let last_index = self.ladder.last_index();
        let mut resolved = 0;
        for (key, measurement) in self.measurements.iter_mut() {
            if key.context != *context || measurement.scale_finalized {
                continue;
            }
            let next = resolve(*measurement, Some(max_height), last_index);
            log_transition(key, measurement, &next);
            *measurement = next;
            resolved += 1;
        }

        tracing::debug!(%context, max_height, resolved, "Updated height budget");
        resolved
    }

    pub fn measurement(&self, key: &MeasurementKey) -> Option<Measurement> {
        self.measurements.get(key).copied()
    }

    /// The preset to render `key` with; the largest one until anything is known.
    pub fn preset(&self, key: &MeasurementKey) -> &ScalePreset {
        let index = self.measurements.get(key).map_or(0, |m| m.scale_index);
        self.ladder.preset(index)
    }

    pub fn max_height(&self, context: &ContextId) -> Option<f32> {
        self.budgets.get(context).copied()
    }

    /// Drop the budget and every measurement of `context`.
    ///
    /// Returns how many measurements were removed.
    pub fn forget_context(&mut self, context: &ContextId) -> usize {
        let before = self.measurements.len();
        self.measurements.retain(|key, _| key.context != *context);
        self.budgets.remove(context);
        before - self.measurements.len()
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    fn dispatch(&mut self, key: &MeasurementKey, event: ScaleEvent) -> Measurement {
        let max_height = self.max_height(&key.context);
        let previous = self.measurements.get(key).copied();
        let next = apply(previous, &event, max_height, &self.ladder);

        if let Some(ref prev) = previous {
            log_transition(key, prev, &next);
        }
        self.measurements.insert(key.clone(), next);
        next
    }
}

fn log_transition(key: &MeasurementKey, before: &Measurement, after: &Measurement) {
    if after.scale_index != before.scale_index {
        tracing::debug!(
            %key,
            from = before.scale_index,
            to = after.scale_index,
            "Content overflows, shrinking scale"
        );
    } else if after.scale_finalized && !before.scale_finalized {
        tracing::debug!(%key, scale_index = after.scale_index, "Scale finalized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(sizes: &[f32]) -> ScaleLadder {
        ScaleLadder::new(
            sizes
                .iter()
                .enumerate()
                .map(|(i, &s)| ScalePreset::uniform(format!("p{i}"), s))
                .collect(),
        )
        .unwrap()
    }

    fn at(scale_index: usize, finalized: bool) -> Measurement {
        Measurement {
            scale_index,
            scale_finalized: finalized,
            ..Measurement::default()
        }
    }

    #[test]
    fn test_resolve_waits_for_both_heights() {
        let m = Measurement {
            content_height: Some(500.0),
            ..Measurement::default()
        };
        assert_eq!(resolve(m, None, 2), m);
        assert_eq!(resolve(at(0, false), Some(100.0), 2), at(0, false));
    }

    #[test]
    fn test_resolve_overflow_advances_and_clears() {
        let m = Measurement {
            scale_index: 0,
            scale_finalized: false,
            content_height: Some(120.0),
            anchor_position: Some(40.0),
        };
        assert_eq!(resolve(m, Some(100.0), 2), at(1, false));
    }

    #[test]
    fn test_resolve_overflow_at_smallest_finalizes() {
        let m = Measurement {
            content_height: Some(120.0),
            ..at(2, false)
        };
        let next = resolve(m, Some(100.0), 2);
        assert_eq!(next.scale_index, 2);
        assert!(next.scale_finalized);
        assert_eq!(next.content_height, Some(120.0));
    }

    #[test]
    fn test_resolve_fit_finalizes() {
        let m = Measurement {
            content_height: Some(100.0),
            ..at(1, false)
        };
        let next = resolve(m, Some(100.0), 2);
        assert!(next.scale_finalized);
        assert_eq!(resolve(next, Some(100.0), 2), next);
    }

    #[test]
    fn test_apply_creates_lazily() {
        let l = ladder(&[100.0, 90.0]);
        let m = apply(None, &ScaleEvent::Anchor { position: 12.0 }, None, &l);
        assert_eq!(m.scale_index, 0);
        assert_eq!(m.anchor_position, Some(12.0));
    }

    #[test]
    fn test_apply_ignores_stale_and_non_finite() {
        let l = ladder(&[100.0, 90.0, 80.0]);
        let current = at(1, false);

        let stale = ScaleEvent::ContentHeight {
            height: 500.0,
            measured_at: Some(0),
        };
        assert_eq!(apply(Some(current), &stale, Some(100.0), &l), current);

        let nan = ScaleEvent::ContentHeight {
            height: f32::NAN,
            measured_at: None,
        };
        assert_eq!(apply(Some(current), &nan, Some(100.0), &l), current);
    }

    #[test]
    fn test_board_example_sequence() {
        let mut board = MeasurementBoard::new(ladder(&[100.0, 90.0, 80.0]));
        let key = MeasurementKey::new("song", "sheet");

        board.report_max_height(&key.context, 100.0);
        let m = board.report_content_height(&key, 120.0);
        assert_eq!((m.scale_index, m.scale_finalized), (1, false));
        assert_eq!(m.content_height, None);

        let m = board.report_content_height(&key, 70.0);
        assert_eq!((m.scale_index, m.scale_finalized), (1, true));
        assert_eq!(board.preset(&key).name, "p1");
    }

    #[test]
    fn test_budget_arriving_late_resolves_pending() {
        let mut board = MeasurementBoard::new(ladder(&[100.0, 90.0, 80.0]));
        let a = MeasurementKey::new("a", "carousel");
        let b = MeasurementKey::new("b", "carousel");
        let other = MeasurementKey::new("c", "sheet");

        board.report_content_height(&a, 150.0);
        board.report_content_height(&b, 50.0);
        board.report_content_height(&other, 150.0);
        assert_eq!(
            board.measurement(&a),
            Some(Measurement {
                content_height: Some(150.0),
                ..at(0, false)
            })
        );

        assert_eq!(board.report_max_height(&ContextId::new("carousel"), 100.0), 2);
        assert_eq!(board.measurement(&a), Some(at(1, false)));
        assert!(board.measurement(&b).unwrap().scale_finalized);
        assert_eq!(board.measurement(&other).unwrap().scale_index, 0);
    }

    #[test]
    fn test_budget_never_reopens_finalized() {
        let mut board = MeasurementBoard::new(ladder(&[100.0, 90.0, 80.0]));
        let key = MeasurementKey::new("song", "sheet");
        board.report_max_height(&key.context, 100.0);
        board.report_content_height(&key, 80.0);
        assert!(board.measurement(&key).unwrap().scale_finalized);

        assert_eq!(board.report_max_height(&key.context, 50.0), 0);
        assert_eq!(board.measurement(&key).unwrap().scale_index, 0);
        assert_eq!(board.max_height(&key.context), Some(50.0));

        // A new content height still shrinks a finalized measurement.
        let m = board.report_content_height(&key, 80.0);
        assert_eq!((m.scale_index, m.scale_finalized), (1, false));
    }

    #[test]
    fn test_converges_within_ladder_length() {
        let l = ladder(&[100.0, 90.0, 80.0, 70.0, 60.0]);
        let mut board = MeasurementBoard::new(l.clone());
        let key = MeasurementKey::new("long", "sheet");
        board.report_max_height(&key.context, 10.0);

        let mut reports = 0;
        let mut last_index = 0;
        loop {
            let size = board.preset(&key).text_size;
            let m = board.report_content_height(&key, size * 3.0);
            reports += 1;
            assert!(m.scale_index >= last_index);
            last_index = m.scale_index;
            if m.scale_finalized {
                break;
            }
            assert!(reports <= l.len());
        }
        assert_eq!(reports, l.len());
        assert_eq!(last_index, l.last_index());
    }

    #[test]
    fn test_stale_report_through_board() {
        let mut board = MeasurementBoard::new(ladder(&[100.0, 90.0]));
        let key = MeasurementKey::new("song", "sheet");
        board.report_max_height(&key.context, 100.0);
        board.report_content_height_at(&key, 130.0, 0);

        let m = board.report_content_height_at(&key, 130.0, 0);
        assert_eq!(m, at(1, false));
        let m = board.report_content_height_at(&key, 95.0, 1);
        assert!(m.scale_finalized);
    }

    #[test]
    fn test_forget_context() {
        let mut board = MeasurementBoard::default();
        let a = MeasurementKey::new("a", "carousel");
        let b = MeasurementKey::new("b", "sheet");
        board.report_anchor(&a, 1.0);
        board.report_anchor(&b, 2.0);
        board.report_max_height(&a.context, 300.0);

        assert_eq!(board.forget_context(&a.context), 1);
        assert_eq!(board.len(), 1);
        assert!(board.measurement(&a).is_none());
        assert!(board.max_height(&a.context).is_none());
        assert_eq!(board.preset(&a).name, "large");
    }
}
