use crate::args::CleanArgs;
use crate::controller::expand::{Expansion, expand_holes};
use crate::controller::join::load_and_join;
use crate::controller::output::{
    gaps_path, ledger_path, output_stem, write_gaps_file, write_ledger_file,
};
use crate::controller::strokes_gained::{AnnotationSummary, StrokesGainedLookup, annotate_strokes};
use crate::error::LedgerError;
use crate::model::HoleRecord;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub holes: usize,
    pub skipped_rows: usize,
    pub strokes: usize,
    pub gaps: usize,
    pub lookups: AnnotationSummary,
    pub ledger_file: PathBuf,
    pub gaps_file: Option<PathBuf>,
}

/// Loads, joins, expands and (when a lookup is given) annotates, then
/// writes the ledger and gap files.
///
/// # Errors
///
/// Will return `Err` if an input file cannot be read, the round file has no
/// rows left after loading, or an output file cannot be written
pub async fn run(
    args: &CleanArgs,
    lookup: Option<&dyn StrokesGainedLookup>,
) -> Result<RunSummary, LedgerError> {
    let (table, skipped_rows) = load_and_join(&args.round_file, &args.distance_file)?;
    let holes = HoleRecord::from_table(&table);
    let Some(first) = holes.first() else {
        return Err(LedgerError::EmptyInput(args.round_file.display().to_string()));
    };
    let stem = output_stem(first);
    let Expansion { mut strokes, gaps } = expand_holes(&holes, args.mode);
    if strokes.is_empty() {
        log::warn!(
            "no hole in {} has a usable score; writing an empty ledger",
            args.round_file.display()
        );
    }

    let lookups = match lookup {
        Some(lookup) => annotate_strokes(&mut strokes, lookup, args.mode, &args.annotator).await,
        None => {
            log::info!("strokes gained lookup disabled");
            AnnotationSummary::default()
        }
    };

    let ledger_file = ledger_path(&args.output_dir, &stem);
    write_ledger_file(&ledger_file, &strokes)?;

    let gaps_file = if args.write_gaps {
        let path = gaps_path(&args.output_dir, &stem);
        write_gaps_file(&path, &gaps)?;
        Some(path)
    } else {
        None
    };

    let summary = RunSummary {
        holes: holes.len(),
        skipped_rows,
        strokes: strokes.len(),
        gaps: gaps.len(),
        lookups,
        ledger_file,
        gaps_file,
    };
    log::info!(
        "run complete: {} holes ({} rows skipped), {} strokes, {} gaps, {} lookups ({} failed)",
        summary.holes,
        summary.skipped_rows,
        summary.strokes,
        summary.gaps,
        summary.lookups.requested,
        summary.lookups.failed
    );
    Ok(summary)
}
