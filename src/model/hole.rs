use super::lie::Lie;
use super::table::Table;
use super::utils::{parse_bool, parse_distance, parse_int};

pub const MAX_PUTTS_RECORDED: usize = 5;

/// Scores above this are treated as corrupt rather than expanded.
pub const MAX_STROKES_PER_HOLE: usize = 30;

pub const PUTT_DISTANCE_COLUMNS: [&str; MAX_PUTTS_RECORDED] = [
    "putt_one_distance",
    "putt_two_distance",
    "putt_three_distance",
    "putt_four_distance",
    "putt_five_distance",
];

/// Suffix given to course-table columns whose name collides with a round
/// column.
pub const COURSE_SUFFIX: &str = "_distance";

/// One player's round on one hole. Columns that were missing or blank in the
/// source are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoleRecord {
    pub player_name: String,
    pub round_id: String,
    pub course_name: String,
    pub hole_number: Option<i64>,
    pub tournament_name: String,
    pub start_date: String,
    pub par: Option<i64>,
    pub score: Option<i64>,
    pub putts: Option<i64>,
    pub gir: bool,
    pub sand: bool,
    pub tee_ball_location: Option<Lie>,
    pub approach_distance: Option<f64>,
    pub yardage: Option<f64>,
    pub putt_distances: [Option<f64>; MAX_PUTTS_RECORDED],
}

impl HoleRecord {
    /// Builds the record for `row` of a joined table. Round values win; an
    /// empty round cell falls back to the course table's suffixed column.
    #[must_use]
    pub fn from_table_row(table: &Table, row: usize) -> Self {
        let cell = |name: &str| -> Option<&str> {
            table
                .get(row, name)
                .or_else(|| table.get(row, &format!("{name}{COURSE_SUFFIX}")))
        };
        let text = |name: &str| cell(name).map(str::to_string).unwrap_or_default();

        let mut putt_distances = [None; MAX_PUTTS_RECORDED];
        for (slot, column) in putt_distances.iter_mut().zip(PUTT_DISTANCE_COLUMNS) {
            *slot = cell(column).and_then(parse_distance);
        }

        HoleRecord {
            player_name: text("player_name"),
            round_id: text("round_id"),
            course_name: text("course_name"),
            hole_number: cell("hole_number").and_then(parse_int),
            tournament_name: text("tournament_name"),
            start_date: text("start_date"),
            par: cell("par").and_then(parse_int),
            score: cell("score").and_then(parse_int),
            putts: cell("putts").and_then(parse_int),
            gir: cell("gir").and_then(parse_bool).unwrap_or(false),
            sand: cell("sand").and_then(parse_bool).unwrap_or(false),
            tee_ball_location: cell("tee_ball_location").map(Lie::parse),
            approach_distance: cell("approach_distance").and_then(parse_distance),
            yardage: cell("yardage").and_then(parse_distance),
            putt_distances,
        }
    }

    #[must_use]
    pub fn from_table(table: &Table) -> Vec<Self> {
        (0..table.len())
            .map(|row| Self::from_table_row(table, row))
            .collect()
    }

    /// Number of strokes to emit. Missing, negative or implausibly large
    /// scores give none.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        let count = self
            .score
            .and_then(|s| usize::try_from(s).ok())
            .unwrap_or(0);
        if count > MAX_STROKES_PER_HOLE {
            log::warn!(
                "round {} hole {:?}: score {count} is over {MAX_STROKES_PER_HOLE}, skipping the hole",
                self.round_id,
                self.hole_number
            );
            return 0;
        }
        count
    }

    #[must_use]
    pub fn putt_count(&self) -> i64 {
        self.putts.unwrap_or(0).max(0)
    }

    #[must_use]
    pub fn is_par_three(&self) -> bool {
        self.par == Some(3)
    }

    /// Distance of the 1-based `putt_number`, if that putt was recorded.
    #[must_use]
    pub fn putt_distance(&self, putt_number: i64) -> Option<f64> {
        let idx = usize::try_from(putt_number.checked_sub(1)?).ok()?;
        self.putt_distances.get(idx).copied().flatten()
    }
}
