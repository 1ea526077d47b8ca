pub mod gap;
pub mod hole;
pub mod lie;
pub mod stroke;
pub mod table;
pub mod utils;

pub use gap::*;
pub use hole::*;
pub use lie::*;
pub use stroke::*;
pub use table::*;
pub use utils::*;
