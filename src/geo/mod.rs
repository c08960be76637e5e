//! Geographic utilities: haversine distance and the per-zip distance table.

pub mod distance;
pub mod haversine;

pub use distance::*;
pub use haversine::*;
