//! # ludo-catalog
//!
//! Domain layer for the Ludo architecture explorer.
//!
//! This crate owns the content and the logic of the service:
//!
//! - **Model**: The `Component` and `Step` document types
//! - **Seed Data**: The hand-authored catalog content loaded at startup
//! - **Store**: The document-store contract plus in-memory and MongoDB backends
//! - **Seeder**: The destructive reset-and-load startup operation
//! - **Reader**: Read-only accessors used by request handlers
//! - **Capacity**: The pure capacity estimation formulas
//!
//! The catalog is immutable after seeding; there are no update or delete
//! operations beyond the startup reseed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod capacity;
pub mod model;
pub mod mongo;
pub mod reader;
pub mod seed;
pub mod seeder;
pub mod store;

pub use capacity::{Calculation, calculate};
pub use model::{Category, Component, DifficultyLevel, Position, Step};
pub use mongo::MongoStore;
pub use reader::CatalogReader;
pub use seed::SeedData;
pub use seeder::reset_and_load;
pub use store::{CatalogStore, MemoryStore};
