use crate::error::LedgerError;
use crate::model::{GapEntry, HoleRecord, LEDGER_HEADERS, StrokeRow, file_name_part};
use std::io::Write;
use std::path::{Path, PathBuf};

/// `{player}_{start_date}` from the first hole, with spaces and path
/// separators turned into underscores.
#[must_use]
pub fn output_stem(first: &HoleRecord) -> String {
    format!(
        "{}_{}",
        file_name_part(&first.player_name),
        file_name_part(&first.start_date)
    )
}

#[must_use]
pub fn ledger_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}_processed.csv"))
}

#[must_use]
pub fn gaps_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}_gaps.csv"))
}

/// # Errors
///
/// Will return `Err` if writing fails
pub fn write_ledger<W: Write>(writer: W, strokes: &[StrokeRow]) -> Result<(), LedgerError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if strokes.is_empty() {
        csv_writer.write_record(LEDGER_HEADERS)?;
    }
    for stroke in strokes {
        csv_writer.serialize(stroke.ledger_record())?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// # Errors
///
/// Will return `Err` if writing fails
pub fn write_gaps<W: Write>(writer: W, gaps: &[GapEntry]) -> Result<(), LedgerError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if gaps.is_empty() {
        csv_writer.write_record(["round_id", "hole_number", "shot_number", "missing_data"])?;
    }
    for gap in gaps {
        csv_writer.serialize(gap)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the file cannot be created or written
pub fn write_ledger_file(path: &Path, strokes: &[StrokeRow]) -> Result<(), LedgerError> {
    write_ledger(std::fs::File::create(path)?, strokes)?;
    log::info!("wrote {} strokes to {}", strokes.len(), path.display());
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the file cannot be created or written
pub fn write_gaps_file(path: &Path, gaps: &[GapEntry]) -> Result<(), LedgerError> {
    write_gaps(std::fs::File::create(path)?, gaps)?;
    log::info!("wrote {} gap entries to {}", gaps.len(), path.display());
    Ok(())
}
