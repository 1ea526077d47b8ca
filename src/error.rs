use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("load error: {0}")]
    Load(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no rows left after loading {0}")]
    EmptyInput(String),
}

/// Failure of a single strokes-gained lookup. Never fatal to a batch.
#[derive(Error, Debug, Clone)]
pub enum LookupError {
    #[error("timed out after {secs}s waiting for {stage}")]
    Timeout { stage: &'static str, secs: u64 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("page element #{0} not present")]
    MissingElement(&'static str),
    #[error("bad selector: {0}")]
    Selector(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
