//! Response types for HTTP handlers.

mod attachment;
mod error_response;
mod exercises;
mod monitors;
mod papers;

pub use attachment::*;
pub use error_response::*;
pub use exercises::*;
pub use monitors::*;
pub use papers::*;
