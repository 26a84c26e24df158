//! Request extractors with JSON error rejections.
//!
//! - [`Json`] - JSON body; malformed bodies are rejected as payload shape errors
//! - [`Multipart`] - multipart body; malformed or oversized bodies are rejected
//! - [`PaperForm`] - the uploaded paper together with generation options

mod json;
mod multipart;
mod paper_form;

pub use self::json::Json;
pub use self::multipart::Multipart;
pub use self::paper_form::{FILE_FIELD, PaperForm};
