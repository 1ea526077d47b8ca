#![allow(dead_code)]

use async_trait::async_trait;
use rusty_golf_ledger::LookupError;
use rusty_golf_ledger::controller::strokes_gained::{LookupRequest, StrokesGainedLookup};
use rusty_golf_ledger::model::{HoleRecord, Lie};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn hole(par: i64, score: i64, putts: i64) -> HoleRecord {
    HoleRecord {
        player_name: "Joe Pagdin".to_string(),
        round_id: "r1".to_string(),
        course_name: "Lake Las Vegas".to_string(),
        hole_number: Some(1),
        tournament_name: "Winter Series".to_string(),
        start_date: "02_24_2025".to_string(),
        par: Some(par),
        score: Some(score),
        putts: Some(putts),
        yardage: Some(410.0),
        ..HoleRecord::default()
    }
}

/// Scenario A: bogey on a par four from the fairway.
pub fn scenario_a() -> HoleRecord {
    let mut h = hole(4, 5, 2);
    h.tee_ball_location = Some(Lie::Fairway);
    h.approach_distance = Some(120.0);
    h.putt_distances[0] = Some(15.0);
    h.putt_distances[1] = Some(2.0);
    h
}

/// Scenario B: two-putt par three after hitting the green.
pub fn scenario_b() -> HoleRecord {
    let mut h = hole(3, 3, 2);
    h.yardage = Some(165.0);
    h.gir = true;
    h.putt_distances[0] = Some(10.0);
    h.putt_distances[1] = Some(1.0);
    h
}

pub const ROUND_HEADER: &str = "Unnamed: 0,player_name,round_id,course_name,hole_number,tournament_name,start_date,par,score,putts,gir,sand,tee_ball_location,approach_distance,putt_one_distance,putt_two_distance,putt_three_distance";

pub const DISTANCE_CSV: &str = "course_name,hole_number,par,yardage
Lake Las Vegas,1,4,410
Lake Las Vegas,2,3,165
Lake Las Vegas,3,5,540
";

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    path
}

pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("open output");
    let headers = reader
        .headers()
        .expect("headers")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.expect("record").iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

pub fn cell<'a>(headers: &[String], row: &'a [String], name: &str) -> &'a str {
    let idx = headers
        .iter()
        .position(|h| h == name)
        .unwrap_or_else(|| panic!("no column {name}"));
    &row[idx]
}

/// Answers every request with a string built from its inputs and remembers
/// what it was asked.
#[derive(Default)]
pub struct RecordingLookup {
    pub calls: Mutex<Vec<LookupRequest>>,
}

impl RecordingLookup {
    pub fn calls(&self) -> Vec<LookupRequest> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl StrokesGainedLookup for RecordingLookup {
    async fn evaluate(&self, request: &LookupRequest) -> Result<String, LookupError> {
        self.calls.lock().expect("lock").push(request.clone());
        Ok(format!(
            "{}{}-{}{}",
            request.start_lie.calculator_code(),
            request.start_distance,
            request.end_lie.calculator_code(),
            request.end_distance
        ))
    }
}

/// Fails any request starting at `fail_from`, answers the rest.
pub struct FailingLookup {
    pub fail_from: i64,
}

#[async_trait]
impl StrokesGainedLookup for FailingLookup {
    async fn evaluate(&self, request: &LookupRequest) -> Result<String, LookupError> {
        if request.start_distance == self.fail_from {
            Err(LookupError::MissingElement("strokes-gained-result"))
        } else {
            Ok("0.10".to_string())
        }
    }
}

/// Never answers requests starting at `hang_from` within any sane timeout.
pub struct HangingLookup {
    pub hang_from: i64,
}

#[async_trait]
impl StrokesGainedLookup for HangingLookup {
    async fn evaluate(&self, request: &LookupRequest) -> Result<String, LookupError> {
        if request.start_distance == self.hang_from {
            tokio::time::sleep(Duration::from_secs(600)).await;
        }
        Ok("-0.25".to_string())
    }
}
