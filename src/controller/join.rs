use crate::error::LedgerError;
use crate::model::{COURSE_SUFFIX, PUTT_DISTANCE_COLUMNS, Table};
use ahash::AHashMap;
use std::io::Read;
use std::path::Path;

/// Columns kept after the join, in output order.
pub const ALLOWED_COLUMNS: &[&str] = &[
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
    PUTT_DISTANCE_COLUMNS[0],
    PUTT_DISTANCE_COLUMNS[1],
    PUTT_DISTANCE_COLUMNS[2],
    PUTT_DISTANCE_COLUMNS[3],
    PUTT_DISTANCE_COLUMNS[4],
    "par_distance",
    "yardage_distance",
];

pub const JOIN_KEYS: [&str; 2] = ["course_name", "hole_number"];

const INDEX_COLUMNS: &[&str] = &["", "Unnamed: 0"];

#[derive(Debug, Clone, Default)]
pub struct LoadedTable {
    pub table: Table,
    pub skipped_rows: usize,
}

/// Reads a CSV whose first line is the header. Rows that fail to parse or
/// whose field count differs from the header are skipped and counted.
///
/// # Errors
///
/// Will return `Err` if the header cannot be read
pub fn read_table<R: Read>(reader: R, source: &str) -> Result<LoadedTable, LedgerError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| LedgerError::Load(format!("{source}: {e}")))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(LedgerError::Load(format!("{source}: no header row")));
    }

    let mut loaded = LoadedTable {
        table: Table::new(headers),
        skipped_rows: 0,
    };
    for (line, record) in csv_reader.records().enumerate() {
        match record {
            Ok(record) => loaded
                .table
                .rows
                .push(record.iter().map(str::to_string).collect()),
            Err(e) => {
                log::warn!("{source}: skipping malformed row {}: {e}", line + 2);
                loaded.skipped_rows += 1;
            }
        }
    }

    drop_index_columns(&mut loaded.table);
    Ok(loaded)
}

/// # Errors
///
/// Will return `Err` if the file cannot be opened or has no header
pub fn load_table(path: &Path) -> Result<LoadedTable, LedgerError> {
    let file = std::fs::File::open(path)
        .map_err(|e| LedgerError::Load(format!("{}: {e}", path.display())))?;
    let loaded = read_table(file, &path.display().to_string())?;
    log::info!(
        "loaded {} rows from {} ({} skipped)",
        loaded.table.len(),
        path.display(),
        loaded.skipped_rows
    );
    Ok(loaded)
}

fn drop_index_columns(table: &mut Table) {
    let keep: Vec<bool> = table
        .headers
        .iter()
        .map(|h| !INDEX_COLUMNS.contains(&h.as_str()))
        .collect();
    if keep.iter().all(|k| *k) {
        return;
    }
    let filter = |cells: &mut Vec<String>| {
        let mut idx = 0;
        cells.retain(|_| {
            let k = keep.get(idx).copied().unwrap_or(true);
            idx += 1;
            k
        });
    };
    filter(&mut table.headers);
    for row in &mut table.rows {
        filter(row);
    }
}

fn join_key(table: &Table, row: usize) -> (String, String) {
    let [course, hole] = JOIN_KEYS.map(|k| table.get(row, k).unwrap_or_default().to_string());
    // "7" and "7.0" name the same hole
    let hole = crate::model::parse_int(&hole).map_or(hole, |h| h.to_string());
    (course, hole)
}

/// Left-joins `distances` onto `rounds` on course name and hole number.
/// Round-side columns keep their names; colliding course columns get the
/// `_distance` suffix unless that name is already taken on the round side.
#[must_use]
pub fn join_tables(rounds: &Table, distances: &Table) -> Table {
    let mut headers = rounds.headers.clone();
    let mut course_columns: Vec<usize> = Vec::new();
    for (idx, name) in distances.headers.iter().enumerate() {
        if JOIN_KEYS.contains(&name.as_str()) {
            continue;
        }
        let out_name = if rounds.has_column(name) {
            format!("{name}{COURSE_SUFFIX}")
        } else {
            name.clone()
        };
        if headers.contains(&out_name) {
            continue;
        }
        headers.push(out_name);
        course_columns.push(idx);
    }

    let mut by_key: AHashMap<(String, String), usize> = AHashMap::new();
    for row in 0..distances.len() {
        by_key.entry(join_key(distances, row)).or_insert(row);
    }

    let mut joined = Table::new(headers);
    let mut unmatched = 0usize;
    for (row_idx, row) in rounds.rows.iter().enumerate() {
        let mut out = row.clone();
        out.resize(rounds.headers.len(), String::new());
        let course_row = by_key
            .get(&join_key(rounds, row_idx))
            .and_then(|r| distances.rows.get(*r));
        if course_row.is_none() {
            unmatched += 1;
        }
        for idx in &course_columns {
            out.push(
                course_row
                    .and_then(|r| r.get(*idx))
                    .cloned()
                    .unwrap_or_default(),
            );
        }
        joined.rows.push(out);
    }

    if unmatched > 0 {
        log::warn!("{unmatched} round rows had no matching course/hole in the distance table");
    }
    joined
}

/// Joins and projects to [`ALLOWED_COLUMNS`].
#[must_use]
pub fn join_and_project(rounds: &Table, distances: &Table) -> Table {
    let joined = join_tables(rounds, distances);
    log::debug!("joined columns: {:?}", joined.headers);
    joined.project(ALLOWED_COLUMNS)
}

/// Loads both files and returns the projected join plus the number of
/// malformed round rows skipped.
///
/// # Errors
///
/// Will return `Err` if either file cannot be read
pub fn load_and_join(
    round_file: &Path,
    distance_file: &Path,
) -> Result<(Table, usize), LedgerError> {
    let rounds = load_table(round_file)?;
    let distances = load_table(distance_file)?;
    Ok((
        join_and_project(&rounds.table, &distances.table),
        rounds.skipped_rows,
    ))
}
