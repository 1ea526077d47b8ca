use super::lookup::LookupRequest;
use crate::controller::expand::ExpansionMode;
use crate::model::{Lie, Location, StrokeRow};
use ahash::AHashMap;

/// A stroke as seen by the strokes-gained pass: its position within its
/// player/round/hole group and the lies it is priced between.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedStroke {
    pub sequence: usize,
    pub start_lie: Lie,
    pub start_distance: Option<f64>,
    pub landing: Location,
}

impl SequencedStroke {
    /// A request, but only when both lies and both distances are known.
    #[must_use]
    pub fn request(&self) -> Option<LookupRequest> {
        if self.start_lie == Lie::Unknown {
            return None;
        }
        let start = self.start_distance?;
        let end = self.landing.distance?;
        let end_lie = self.landing.lie.clone().filter(|lie| *lie != Lie::Unknown)?;
        Some(LookupRequest::new(self.start_lie.clone(), start, end_lie, end))
    }
}

type GroupKey<'a> = (&'a str, &'a str, Option<i64>);

fn group_key(stroke: &StrokeRow) -> GroupKey<'_> {
    (
        stroke.hole.player_name.as_str(),
        stroke.hole.round_id.as_str(),
        stroke.hole.hole_number,
    )
}

/// Groups strokes by player, round and hole in input order and numbers each
/// group from 1. The first stroke of a group starts on the tee; every later
/// stroke starts where the previous one landed.
///
/// With landing tracking a stroke is priced against its own landing only.
/// Starting-only rows carry no landing, so there a stroke lands where the
/// next one starts and the last stroke of a group is treated as holed.
///
/// The result is aligned with `strokes`.
#[must_use]
pub fn sequence_strokes(strokes: &[StrokeRow], mode: ExpansionMode) -> Vec<SequencedStroke> {
    let mut groups: AHashMap<GroupKey<'_>, Vec<usize>> = AHashMap::new();
    for (idx, stroke) in strokes.iter().enumerate() {
        groups.entry(group_key(stroke)).or_default().push(idx);
    }

    let mut sequenced: Vec<Option<SequencedStroke>> = vec![None; strokes.len()];
    for members in groups.values() {
        let mut previous_landing: Option<Lie> = None;
        for (pos, &idx) in members.iter().enumerate() {
            let stroke = &strokes[idx];
            let landing = match mode {
                ExpansionMode::LandingTracking => stroke.landing.clone(),
                ExpansionMode::StartingOnly => {
                    let next = members.get(pos + 1).map(|&n| &strokes[n].start);
                    next_start_landing(next)
                }
            };

            let start_lie = if pos == 0 {
                Lie::Tee
            } else {
                previous_landing
                    .take()
                    .or_else(|| stroke.start.lie.clone())
                    .unwrap_or(Lie::Unknown)
            };
            previous_landing.clone_from(&landing.lie);

            sequenced[idx] = Some(SequencedStroke {
                sequence: pos + 1,
                start_lie,
                start_distance: stroke.start.distance,
                landing,
            });
        }
    }

    sequenced.into_iter().flatten().collect()
}

fn next_start_landing(next_start: Option<&Location>) -> Location {
    next_start.cloned().unwrap_or_else(Location::holed)
}

/// One optional request per stroke, aligned with `strokes`.
#[must_use]
pub fn plan_lookups(strokes: &[StrokeRow], mode: ExpansionMode) -> Vec<Option<LookupRequest>> {
    sequence_strokes(strokes, mode)
        .iter()
        .map(SequencedStroke::request)
        .collect()
}
