use super::lookup::{LookupRequest, StrokesGainedLookup};
use super::sequence::plan_lookups;
use crate::controller::expand::ExpansionMode;
use crate::model::StrokeRow;
use futures::future::join_all;
use std::time::Duration;

pub const DEFAULT_WORKERS: usize = 4;

#[derive(Debug, Clone)]
pub struct AnnotatorConfig {
    pub workers: usize,
    /// Upper bound on a whole lookup call, on top of whatever the lookup
    /// enforces itself.
    pub call_timeout: Duration,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            call_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Strokes never sent because a lie or distance was unknown.
    pub skipped: usize,
}

/// Fills `strokes_gained` on every stroke whose start and landing are both
/// known, read the way `mode` expanded them. Requests are split into
/// `workers` contiguous groups; each group runs its calls in turn and the
/// groups run together. A failed call
/// leaves that stroke's value empty and the batch carries on.
pub async fn annotate_strokes<L>(
    strokes: &mut [StrokeRow],
    lookup: &L,
    mode: ExpansionMode,
    config: &AnnotatorConfig,
) -> AnnotationSummary
where
    L: StrokesGainedLookup + ?Sized,
{
    let pending: Vec<(usize, LookupRequest)> = plan_lookups(strokes, mode)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, request)| request.map(|r| (idx, r)))
        .collect();

    let mut summary = AnnotationSummary {
        requested: pending.len(),
        skipped: strokes.len() - pending.len(),
        ..AnnotationSummary::default()
    };
    if pending.is_empty() {
        return summary;
    }

    let group_size = pending.len().div_ceil(config.workers.max(1));
    let groups = pending.chunks(group_size).map(|group| async move {
        let mut results = Vec::with_capacity(group.len());
        for (idx, request) in group {
            results.push((*idx, evaluate_one(lookup, request, config.call_timeout).await));
        }
        results
    });

    for (idx, outcome) in join_all(groups).await.into_iter().flatten() {
        match outcome {
            Some(value) => {
                summary.succeeded += 1;
                strokes[idx].strokes_gained = value;
            }
            None => {
                summary.failed += 1;
                strokes[idx].strokes_gained.clear();
            }
        }
    }

    log::info!(
        "strokes gained: {} requested, {} ok, {} failed, {} skipped",
        summary.requested,
        summary.succeeded,
        summary.failed,
        summary.skipped
    );
    summary
}

async fn evaluate_one<L>(lookup: &L, request: &LookupRequest, call_timeout: Duration) -> Option<String>
where
    L: StrokesGainedLookup + ?Sized,
{
    log::debug!("strokes gained lookup: {request}");
    match tokio::time::timeout(call_timeout, lookup.evaluate(request)).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            log::warn!("strokes gained lookup failed for {request}: {e}");
            None
        }
        Err(_) => {
            log::warn!("strokes gained lookup for {request} gave up after {call_timeout:?}");
            None
        }
    }
}
