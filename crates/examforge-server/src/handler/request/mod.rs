//! Request types for HTTP handlers.

mod exercises;

pub use exercises::*;
