use super::hole::HoleRecord;
use super::lie::Lie;
use super::utils::format_distance;
use serde::Serialize;

/// A lie and distance pair. Either half may be unresolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub lie: Option<Lie>,
    pub distance: Option<f64>,
}

impl Location {
    #[must_use]
    pub fn new(lie: Lie, distance: Option<f64>) -> Self {
        Self {
            lie: Some(lie),
            distance,
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn holed() -> Self {
        Self::new(Lie::Hole, Some(0.0))
    }
}

/// One stroke of a hole.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRow {
    pub hole: HoleRecord,
    pub shot_number: usize,
    pub start: Location,
    pub landing: Location,
    pub strokes_gained: String,
}

pub const LEDGER_HEADERS: &[&str] = &[
    "player_name",
    "round_id",
    "course_name",
    "hole_number",
    "tournament_name",
    "start_date",
    "par",
    "score",
    "putts",
    "gir",
    "sand",
    "tee_ball_location",
    "approach_distance",
    "yardage",
    "putt_one_distance",
    "putt_two_distance",
    "putt_three_distance",
    "putt_four_distance",
    "putt_five_distance",
    "shot_number",
    "starting_location_lie",
    "starting_location_distance",
    "landing_location_lie",
    "landing_location_distance",
    "strokes_gained",
];

/// Flat CSV view of a [`StrokeRow`]. Field order is [`LEDGER_HEADERS`].
#[derive(Debug, Serialize)]
pub struct LedgerRecord<'a> {
    pub player_name: &'a str,
    pub round_id: &'a str,
    pub course_name: &'a str,
    pub hole_number: Option<i64>,
    pub tournament_name: &'a str,
    pub start_date: &'a str,
    pub par: Option<i64>,
    pub score: Option<i64>,
    pub putts: Option<i64>,
    pub gir: bool,
    pub sand: bool,
    pub tee_ball_location: Option<&'a str>,
    pub approach_distance: String,
    pub yardage: String,
    pub putt_one_distance: String,
    pub putt_two_distance: String,
    pub putt_three_distance: String,
    pub putt_four_distance: String,
    pub putt_five_distance: String,
    pub shot_number: usize,
    pub starting_location_lie: Option<&'a str>,
    pub starting_location_distance: String,
    pub landing_location_lie: Option<&'a str>,
    pub landing_location_distance: String,
    pub strokes_gained: &'a str,
}

impl StrokeRow {
    #[must_use]
    pub fn ledger_record(&self) -> LedgerRecord<'_> {
        let h = &self.hole;
        let [one, two, three, four, five] = h.putt_distances.map(format_distance);
        LedgerRecord {
            player_name: &h.player_name,
            round_id: &h.round_id,
            course_name: &h.course_name,
            hole_number: h.hole_number,
            tournament_name: &h.tournament_name,
            start_date: &h.start_date,
            par: h.par,
            score: h.score,
            putts: h.putts,
            gir: h.gir,
            sand: h.sand,
            tee_ball_location: h.tee_ball_location.as_ref().map(Lie::as_str),
            approach_distance: format_distance(h.approach_distance),
            yardage: format_distance(h.yardage),
            putt_one_distance: one,
            putt_two_distance: two,
            putt_three_distance: three,
            putt_four_distance: four,
            putt_five_distance: five,
            shot_number: self.shot_number,
            starting_location_lie: self.start.lie.as_ref().map(Lie::as_str),
            starting_location_distance: format_distance(self.start.distance),
            landing_location_lie: self.landing.lie.as_ref().map(Lie::as_str),
            landing_location_distance: format_distance(self.landing.distance),
            strokes_gained: &self.strokes_gained,
        }
    }
}
