//! Middleware for `axum::Router` and HTTP request processing.
//!
//! - Security: CORS, body limits, `X-Content-Type-Options`
//! - Observability: request IDs and tracing spans
//! - Recovery: panics and timeouts answered with JSON errors
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use axum::Router;
//! use examforge_server::middleware::{
//!     BodyLimitConfig, CorsConfig, RecoveryConfig, RouterObservabilityExt, RouterRecoveryExt,
//!     RouterSecurityExt,
//! };
//!
//! let app: Router = Router::new()
//!     .with_security(&CorsConfig::default(), &BodyLimitConfig::default())
//!     .with_observability()
//!     .with_recovery(&RecoveryConfig::default());
//! ```

mod observability;
mod recovery;
mod security;

pub use observability::RouterObservabilityExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{BodyLimitConfig, CorsConfig, DEFAULT_MAX_UPLOAD_SIZE, RouterSecurityExt};
