use crate::error::LookupError;
use crate::model::Lie;
use async_trait::async_trait;
use std::fmt;

/// Inputs for one strokes-gained evaluation. Distances are whole units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub start_lie: Lie,
    pub start_distance: i64,
    pub end_lie: Lie,
    pub end_distance: i64,
}

impl LookupRequest {
    #[must_use]
    pub fn new(start_lie: Lie, start_distance: f64, end_lie: Lie, end_distance: f64) -> Self {
        Self {
            start_lie,
            start_distance: start_distance.round() as i64,
            end_lie,
            end_distance: end_distance.round() as i64,
        }
    }
}

impl fmt::Display for LookupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} -> {} ({}) {}",
            self.start_lie,
            self.start_lie.calculator_code(),
            self.start_distance,
            self.end_lie,
            self.end_lie.calculator_code(),
            self.end_distance
        )
    }
}

/// Something that can price a single stroke.
#[async_trait]
pub trait StrokesGainedLookup: Send + Sync {
    async fn evaluate(&self, request: &LookupRequest) -> Result<String, LookupError>;
}
