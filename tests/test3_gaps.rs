mod common;

use common::{hole, scenario_a, scenario_b};
use rusty_golf_ledger::controller::output::write_gaps;
use rusty_golf_ledger::model::{GapEntry, Lie, MissingField};
use rusty_golf_ledger::{ExpansionMode, expand_holes};

fn gaps_for(holes: &[rusty_golf_ledger::model::HoleRecord]) -> Vec<GapEntry> {
    expand_holes(holes, ExpansionMode::LandingTracking).gaps
}

fn summary(gaps: &[GapEntry]) -> Vec<(usize, String)> {
    gaps.iter()
        .map(|g| (g.shot_number, g.missing_data.to_string()))
        .collect()
}

#[test]
fn scenario_a_gaps() {
    let gaps = gaps_for(&[scenario_a()]);
    assert_eq!(
        summary(&gaps),
        vec![
            (2, "landing_location_lie and landing_location_distance".to_string()),
            (3, "landing_location_lie and landing_location_distance".to_string()),
        ]
    );
    assert!(gaps.iter().all(|g| g.round_id == "r1" && g.hole_number == Some(1)));
}

#[test]
fn scenario_b_has_no_gaps() {
    assert!(gaps_for(&[scenario_b()]).is_empty());
}

#[test]
fn par_three_green_in_regulation_never_misses_the_landing_lie() {
    let mut h = scenario_b();
    h.putt_distances = [None; 5];
    let gaps = gaps_for(&[h]);
    let tee_gap = gaps.iter().find(|g| g.shot_number == 1).expect("distance gap");
    assert!(!tee_gap.missing_data.contains(MissingField::LandingLocationLie));
    assert_eq!(tee_gap.missing_data.to_string(), "landing_location_distance");
}

#[test]
fn par_three_missed_green_without_sand_misses_both() {
    let mut h = hole(3, 4, 2);
    h.gir = false;
    h.sand = false;
    let gaps = gaps_for(&[h.clone()]);
    assert_eq!(
        summary(&gaps)[0],
        (1, "landing_location_lie and landing_location_distance".to_string())
    );

    h.sand = true;
    let gaps = gaps_for(&[h]);
    assert_eq!(summary(&gaps)[0], (1, "landing_location_distance".to_string()));
}

#[test]
fn par_four_tee_ball_outside_measured_lies_misses_distance() {
    let mut h = hole(4, 4, 2);
    h.approach_distance = Some(140.0);
    h.tee_ball_location = Some(Lie::Sand);
    let gaps = gaps_for(&[h.clone()]);
    assert_eq!(summary(&gaps)[0], (1, "landing_location_distance".to_string()));

    h.tee_ball_location = None;
    let gaps = gaps_for(&[h]);
    assert_eq!(
        summary(&gaps)[0],
        (1, "landing_location_lie and landing_location_distance".to_string())
    );
}

#[test]
fn second_shot_with_nothing_recorded_misses_start_too() {
    let gaps = gaps_for(&[hole(4, 4, 2)]);
    let second = gaps.iter().find(|g| g.shot_number == 2).expect("second shot gap");
    assert_eq!(
        second.missing_data.to_string(),
        "starting_location_lie, starting_location_distance, landing_location_lie and landing_location_distance"
    );
}

#[test]
fn gaps_keep_input_order_across_holes() {
    let mut second_hole = scenario_a();
    second_hole.hole_number = Some(2);
    let gaps = gaps_for(&[scenario_a(), scenario_b(), second_hole]);
    let order: Vec<(Option<i64>, usize)> = gaps.iter().map(|g| (g.hole_number, g.shot_number)).collect();
    assert_eq!(order, vec![(Some(1), 2), (Some(1), 3), (Some(2), 2), (Some(2), 3)]);
}

#[test]
fn gap_table_csv() {
    let mut out = Vec::new();
    write_gaps(&mut out, &gaps_for(&[scenario_a()])).expect("write");
    let text = String::from_utf8(out).expect("utf8");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("round_id,hole_number,shot_number,missing_data"));
    assert_eq!(
        lines.next(),
        Some("r1,1,2,landing_location_lie and landing_location_distance")
    );
}

#[test]
fn approach_shots_only_miss_their_landing() {
    let gaps = gaps_for(&[hole(5, 7, 2)]);
    let approaches: Vec<String> = gaps
        .iter()
        .filter(|g| (3..=5).contains(&g.shot_number))
        .map(|g| g.missing_data.to_string())
        .collect();
    assert_eq!(
        approaches,
        vec!["landing_location_lie and landing_location_distance"; 3]
    );
}
