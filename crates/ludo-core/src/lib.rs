//! # ludo-core
//!
//! Core abstractions for the Ludo architecture explorer service.
//!
//! This crate provides the foundational types used across all Ludo components:
//!
//! - **Identifiers**: Strongly-typed IDs for catalog documents
//! - **Error Types**: Shared error definitions and result types
//! - **Observability**: Structured logging initialization
//!
//! ## Crate Boundary
//!
//! `ludo-core` is the only crate allowed to define shared primitives.
//! Domain logic lives in `ludo-catalog`; HTTP composition lives in `ludo-api`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod observability;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::id::{ComponentId, StepId};
    pub use crate::observability::{LogFormat, init_logging};
}

pub use error::{Error, Result};
pub use id::{ComponentId, StepId};
pub use observability::{LogFormat, init_logging};
