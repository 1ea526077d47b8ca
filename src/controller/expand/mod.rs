pub mod rules;

use crate::controller::completeness::CompletenessTracker;
use crate::model::{GapEntry, HoleRecord, Location, StrokeRow};
use clap::ValueEnum;
use rules::{ShotContext, rule_for};

/// Which fields the expander derives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExpansionMode {
    /// Starting and landing fields, with gap tracking.
    #[default]
    LandingTracking,
    /// Starting fields only. Landing stays blank and no gaps are kept.
    StartingOnly,
}

#[derive(Debug, Default)]
pub struct Expansion {
    pub strokes: Vec<StrokeRow>,
    pub gaps: Vec<GapEntry>,
}

/// Emits one row per stroke of `hole`, shot numbers 1..=score.
pub fn expand_hole(
    hole: &HoleRecord,
    mode: ExpansionMode,
    tracker: &mut CompletenessTracker,
) -> Vec<StrokeRow> {
    (1..=hole.stroke_count())
        .map(|shot_number| {
            let ctx = ShotContext::new(hole, shot_number);
            let rule = rule_for(&ctx);
            let landing = match mode {
                ExpansionMode::LandingTracking => (rule.landing)(&ctx),
                ExpansionMode::StartingOnly => Location::unknown(),
            };
            let stroke = StrokeRow {
                hole: hole.clone(),
                shot_number,
                start: (rule.start)(&ctx),
                landing,
                strokes_gained: String::new(),
            };
            if mode == ExpansionMode::LandingTracking {
                tracker.observe(&stroke, rule.tracks_start);
            }
            stroke
        })
        .collect()
}

#[must_use]
pub fn expand_holes(holes: &[HoleRecord], mode: ExpansionMode) -> Expansion {
    let mut tracker = CompletenessTracker::new();
    let strokes: Vec<StrokeRow> = holes
        .iter()
        .flat_map(|hole| expand_hole(hole, mode, &mut tracker))
        .collect();
    log::info!(
        "expanded {} holes into {} strokes ({} with gaps)",
        holes.len(),
        strokes.len(),
        tracker.entries().len()
    );
    Expansion {
        strokes,
        gaps: tracker.into_entries(),
    }
}
