//! Reporting utilities: joins, ranking, and log-friendly tables.

pub mod format;
pub mod join;
pub mod rank;

pub use format::*;
pub use join::*;
pub use rank::*;
