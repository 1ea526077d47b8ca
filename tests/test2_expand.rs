mod common;

use common::{hole, scenario_a, scenario_b};
use rusty_golf_ledger::controller::completeness::CompletenessTracker;
use rusty_golf_ledger::model::{HoleRecord, Lie, Location, StrokeRow, Table};
use rusty_golf_ledger::{ExpansionMode, expand_hole, expand_holes};

fn loc(lie: Lie, distance: Option<f64>) -> Location {
    Location::new(lie, distance)
}

fn expand(h: &HoleRecord) -> Vec<StrokeRow> {
    expand_hole(h, ExpansionMode::LandingTracking, &mut CompletenessTracker::new())
}

#[test]
fn scenario_a_bogey_from_the_fairway() {
    let strokes = expand(&scenario_a());
    let got: Vec<(usize, Location, Location)> = strokes
        .iter()
        .map(|s| (s.shot_number, s.start.clone(), s.landing.clone()))
        .collect();

    assert_eq!(
        got,
        vec![
            (1, loc(Lie::Tee, Some(410.0)), loc(Lie::Fairway, Some(120.0))),
            (2, loc(Lie::Fairway, Some(120.0)), Location::unknown()),
            (3, loc(Lie::Approach, None), Location::unknown()),
            (4, loc(Lie::Green, Some(15.0)), loc(Lie::Green, Some(2.0))),
            (5, loc(Lie::Green, Some(2.0)), Location::holed()),
        ]
    );
}

#[test]
fn scenario_b_two_putt_par_three() {
    let mut h = scenario_b();
    let strokes = expand(&h);
    assert_eq!(strokes[0].start, loc(Lie::Tee, Some(165.0)));
    assert_eq!(strokes[0].landing, loc(Lie::Green, Some(10.0)));
    assert_eq!(strokes[1].start, loc(Lie::Green, Some(10.0)));
    assert_eq!(strokes[1].landing, loc(Lie::Green, Some(1.0)));
    assert_eq!(strokes[2].start, loc(Lie::Green, Some(1.0)));
    assert_eq!(strokes[2].landing, Location::holed());
    assert!(expand_holes(&[h.clone()], ExpansionMode::LandingTracking).gaps.is_empty());

    // par three tee shots start from the approach distance when there is one
    h.approach_distance = Some(158.0);
    assert_eq!(expand(&h)[0].start, loc(Lie::Tee, Some(158.0)));
}

#[test]
fn par_four_tee_shot_ignores_approach_distance_for_start() {
    let strokes = expand(&scenario_a());
    assert_eq!(strokes[0].start.distance, Some(410.0));
}

#[test]
fn one_row_per_stroke_numbered_from_one() {
    for (par, score, putts) in [(3, 1, 0), (3, 2, 1), (4, 4, 2), (4, 7, 3), (5, 9, 4), (4, 0, 0)] {
        let strokes = expand(&hole(par, score, putts));
        let numbers: Vec<usize> = strokes.iter().map(|s| s.shot_number).collect();
        let expected: Vec<usize> = (1..=usize::try_from(score).unwrap()).collect();
        assert_eq!(numbers, expected, "par {par} score {score} putts {putts}");
    }
}

#[test]
fn final_putt_always_holes_out() {
    for (par, score, putts) in [(3, 2, 1), (3, 3, 2), (4, 6, 3), (5, 5, 1), (4, 8, 5)] {
        let strokes = expand(&hole(par, score, putts));
        let last = strokes.last().expect("strokes");
        assert_eq!(last.landing, Location::holed(), "par {par} score {score} putts {putts}");
    }
}

#[test]
fn putts_beyond_the_fifth_have_unknown_distances() {
    let mut h = hole(4, 8, 6);
    h.putt_distances = [Some(40.0), Some(12.0), Some(6.0), Some(4.0), Some(3.0)];
    let strokes = expand(&h);
    // putts are shots 3..=8; putt five lands on an unrecorded sixth putt
    assert_eq!(strokes[6].start, loc(Lie::Green, Some(3.0)));
    assert_eq!(strokes[6].landing, loc(Lie::Green, None));
    assert_eq!(strokes[7].start, loc(Lie::Green, None));
    assert_eq!(strokes[7].landing, Location::holed());
}

#[test]
fn more_putts_than_strokes_does_not_crash() {
    let strokes = expand(&hole(4, 2, 5));
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[0].start.lie, Some(Lie::Tee));
    assert_eq!(strokes[1].landing, Location::holed());
}

#[test]
fn fractional_and_missing_scores() {
    let mut h = hole(4, 4, 2);
    h.score = None;
    assert!(expand(&h).is_empty());
    h.score = Some(-2);
    assert!(expand(&h).is_empty());

    for score in ["5.0", "5.9"] {
        let table = Table {
            headers: vec!["player_name".to_string(), "par".to_string(), "score".to_string()],
            rows: vec![vec!["Joe Pagdin".to_string(), "4".to_string(), score.to_string()]],
        };
        let strokes = expand(&HoleRecord::from_table_row(&table, 0));
        let numbers: Vec<usize> = strokes.iter().map(|s| s.shot_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5], "score {score}");
    }
}

#[test]
fn second_shot_without_tee_ball_location_starts_unknown() {
    let strokes = expand(&hole(4, 4, 2));
    assert_eq!(strokes[1].start, loc(Lie::Unknown, None));
    assert_eq!(strokes[0].landing, Location::unknown());
}

#[test]
fn starting_only_mode_leaves_landing_blank() {
    let expansion = expand_holes(&[scenario_a(), scenario_b()], ExpansionMode::StartingOnly);
    assert_eq!(expansion.strokes.len(), 8);
    assert!(expansion.gaps.is_empty());
    assert!(expansion.strokes.iter().all(|s| s.landing == Location::unknown()));
    assert_eq!(expansion.strokes[3].start, loc(Lie::Green, Some(15.0)));
}

#[test]
fn holes_are_expanded_independently() {
    let alone = expand(&scenario_b());
    let after_other = expand_holes(&[scenario_a(), scenario_b()], ExpansionMode::LandingTracking);
    assert_eq!(&after_other.strokes[5..], &alone[..]);
}
