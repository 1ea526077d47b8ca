pub mod client;
pub mod lookup;
pub mod processing;
pub mod sequence;

pub use client::*;
pub use lookup::*;
pub use processing::*;
pub use sequence::*;
