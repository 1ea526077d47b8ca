pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod completeness;
    pub mod expand;
    pub mod join;
    pub mod output;
    pub mod pipeline;
    pub mod strokes_gained;
}

pub use controller::expand::{ExpansionMode, expand_hole, expand_holes};
pub use controller::pipeline::{RunSummary, run};
pub use error::{LedgerError, LookupError};
