//! Command implementations.

pub mod crop;
pub mod format;
pub mod geometry;
pub mod normalize;
pub mod read;
pub mod redisplay;

