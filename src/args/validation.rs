use super::types::{Args, CleanArgs};
use crate::controller::strokes_gained::AnnotatorConfig;
use std::time::Duration;
use std::{fs, path::PathBuf};

/// Stages a single calculator call goes through, each bounded by the
/// per-stage wait.
const LOOKUP_STAGES: u32 = 2;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::File::open(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the path is not an existing, writable directory
pub fn check_writable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    let metadata =
        fs::metadata(&path).map_err(|_| format!("The output directory '{dir}' does not exist."))?;
    if !metadata.is_dir() {
        return Err(format!("'{dir}' is not a directory."));
    }
    if metadata.permissions().readonly() {
        return Err(format!("The output directory '{dir}' is read-only."));
    }
    Ok(path)
}

impl Args {
    /// Checks the numeric options and builds the settings the run uses.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the timeout or worker count is zero
    pub fn validate(self) -> Result<CleanArgs, String> {
        if self.lookup_timeout_secs == 0 {
            return Err("lookup-timeout-secs must be greater than zero".to_string());
        }
        if self.workers == 0 {
            return Err("workers must be at least 1".to_string());
        }
        if !self.skip_lookup && self.lookup_url.trim().is_empty() {
            return Err("lookup-url is required unless --skip-lookup is given".to_string());
        }

        let lookup_wait = Duration::from_secs(self.lookup_timeout_secs);
        Ok(CleanArgs {
            round_file: self.round_file,
            distance_file: self.distance_file,
            output_dir: self.output_dir,
            mode: self.mode,
            lookup_url: (!self.skip_lookup).then_some(self.lookup_url),
            lookup_wait,
            annotator: AnnotatorConfig {
                workers: self.workers,
                call_timeout: lookup_wait * (LOOKUP_STAGES + 1),
            },
            write_gaps: !self.no_gaps_file,
        })
    }
}
