//! Shared types for odometer reading normalization and crop geometry.
//!
//! This crate defines the data model passed between the capture pipeline,
//! the normalizer and the CLI, plus the JSON response envelope the CLI prints.

mod geometry;
mod reading;
mod response;

pub use geometry::*;
pub use reading::*;
pub use response::*;
