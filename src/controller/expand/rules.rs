use crate::model::{HoleRecord, Lie, Location};

/// What the rules know about one stroke of a hole.
#[derive(Debug, Clone, Copy)]
pub struct ShotContext<'a> {
    pub hole: &'a HoleRecord,
    pub shot_number: i64,
    pub putts: i64,
    /// 1-based index into the putt distances. Zero or negative before the
    /// putting phase.
    pub putt_number: i64,
}

impl<'a> ShotContext<'a> {
    #[must_use]
    pub fn new(hole: &'a HoleRecord, shot_number: usize) -> Self {
        let shot_number = i64::try_from(shot_number).unwrap_or(i64::MAX);
        let strokes = i64::try_from(hole.stroke_count()).unwrap_or(i64::MAX);
        let putts = hole.putt_count();
        Self {
            hole,
            shot_number,
            putts,
            putt_number: shot_number.saturating_sub(strokes.saturating_sub(putts)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotKind {
    Tee,
    Putt,
    Second,
    Approach,
}

/// One row of the stroke classifier: a position predicate and the two
/// resolvers used when it matches.
pub struct ShotRule {
    pub kind: ShotKind,
    pub applies: fn(&ShotContext<'_>) -> bool,
    pub start: fn(&ShotContext<'_>) -> Location,
    pub landing: fn(&ShotContext<'_>) -> Location,
    /// Whether an unresolved starting field counts as a gap. Off for rules
    /// whose start distance is never derived.
    pub tracks_start: bool,
}

/// Evaluated top to bottom; the first rule that applies wins. Putts are
/// checked before the second shot so a two-putt par three putts on shot 2.
pub const RULES: &[ShotRule] = &[
    ShotRule {
        kind: ShotKind::Tee,
        applies: |ctx| ctx.shot_number == 1,
        start: tee_start,
        landing: tee_landing,
        tracks_start: false,
    },
    ShotRule {
        kind: ShotKind::Putt,
        applies: |ctx| ctx.putts >= 1 && ctx.putt_number >= 1,
        start: |ctx| Location::new(Lie::Green, ctx.hole.putt_distance(ctx.putt_number)),
        landing: putt_landing,
        tracks_start: false,
    },
    ShotRule {
        kind: ShotKind::Second,
        applies: |ctx| ctx.shot_number == 2,
        start: |ctx| {
            Location::new(
                ctx.hole.tee_ball_location.clone().unwrap_or(Lie::Unknown),
                ctx.hole.approach_distance,
            )
        },
        landing: |_| Location::unknown(),
        tracks_start: true,
    },
    ShotRule {
        kind: ShotKind::Approach,
        applies: |_| true,
        start: |_| Location::new(Lie::Approach, None),
        landing: |_| Location::unknown(),
        tracks_start: false,
    },
];

#[must_use]
pub fn rule_for(ctx: &ShotContext<'_>) -> &'static ShotRule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .unwrap_or(&RULES[RULES.len() - 1])
}

fn tee_start(ctx: &ShotContext<'_>) -> Location {
    let hole = ctx.hole;
    let distance = match hole.approach_distance {
        Some(d) if hole.is_par_three() => Some(d),
        _ => hole.yardage,
    };
    Location::new(Lie::Tee, distance)
}

fn tee_landing(ctx: &ShotContext<'_>) -> Location {
    let hole = ctx.hole;
    if hole.is_par_three() {
        if hole.gir {
            Location::new(Lie::Green, hole.putt_distance(1))
        } else if hole.sand {
            Location::new(Lie::Sand, None)
        } else {
            Location::unknown()
        }
    } else {
        match &hole.tee_ball_location {
            Some(lie) if lie.measures_approach() => {
                Location::new(lie.clone(), hole.approach_distance)
            }
            Some(lie) => Location::new(lie.clone(), None),
            None => Location::unknown(),
        }
    }
}

fn putt_landing(ctx: &ShotContext<'_>) -> Location {
    if ctx.putt_number >= ctx.putts {
        Location::holed()
    } else {
        Location::new(Lie::Green, ctx.hole.putt_distance(ctx.putt_number + 1))
    }
}
