use crate::model::{GapEntry, Lie, MissingData, MissingField, StrokeRow};

/// Collects strokes whose lie or distance could not be derived, in the order
/// they are observed.
#[derive(Debug, Default)]
pub struct CompletenessTracker {
    entries: Vec<GapEntry>,
}

impl CompletenessTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a gap for `stroke` if any tracked field is unresolved.
    /// Starting fields only count when `tracks_start` is set.
    pub fn observe(&mut self, stroke: &StrokeRow, tracks_start: bool) {
        let missing = missing_fields(stroke, tracks_start);
        if missing.is_empty() {
            return;
        }
        log::debug!(
            "round {} hole {:?} shot {}: missing {missing}",
            stroke.hole.round_id,
            stroke.hole.hole_number,
            stroke.shot_number
        );
        self.entries.push(GapEntry {
            round_id: stroke.hole.round_id.clone(),
            hole_number: stroke.hole.hole_number,
            shot_number: stroke.shot_number,
            missing_data: missing,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[GapEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<GapEntry> {
        self.entries
    }
}

#[must_use]
pub fn missing_fields(stroke: &StrokeRow, tracks_start: bool) -> MissingData {
    let mut missing = MissingData::default();
    if tracks_start {
        if matches!(stroke.start.lie, None | Some(Lie::Unknown)) {
            missing.insert(MissingField::StartingLocationLie);
        }
        if stroke.start.distance.is_none() {
            missing.insert(MissingField::StartingLocationDistance);
        }
    }
    if stroke.landing.lie.is_none() {
        missing.insert(MissingField::LandingLocationLie);
    }
    if stroke.landing.distance.is_none() {
        missing.insert(MissingField::LandingLocationDistance);
    }
    missing
}
