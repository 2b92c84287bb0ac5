//! # ludo-api
//!
//! HTTP composition layer for the Ludo architecture explorer.
//!
//! This crate provides the API surface for Ludo, handling:
//!
//! - **Routing**: HTTP endpoint configuration
//! - **Service Wiring**: Composition of the catalog store and seeder
//! - **Observability**: Metrics, tracing, and health checks
//!
//! ## Design Principles
//!
//! This crate is a **thin composition layer** with no domain policy.
//! All catalog content and calculation logic lives in `ludo-catalog`.
//!
//! ## Endpoints
//!
//! ```text
//! GET  /health                       - Health check
//! GET  /ready                        - Readiness check (store connectivity)
//! GET  /metrics                      - Prometheus metrics
//! GET  /openapi.json                 - OpenAPI 3.1 document
//! GET  /api/v1/components            - List components (optional difficulty filter)
//! GET  /api/v1/components/{id}       - Get one component
//! GET  /api/v1/steps                 - List request-flow steps
//! GET  /api/v1/steps/{step_number}   - Get one step
//! POST /api/v1/calculate-capacity    - Capacity estimation
//! GET  /api/v1/overview              - Headline platform metrics
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use ludo_api::server::Server;
//!
//! let server = Server::builder()
//!     .http_port(8080)
//!     .debug(true)
//!     .build();
//!
//! server.serve().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod server;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::server::Server;
}
