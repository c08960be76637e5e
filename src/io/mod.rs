//! Input/output helpers.
//!
//! - CSV ingest + validation of the three source tables (`ingest`)
//! - JSON output of the ranked facilities (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
