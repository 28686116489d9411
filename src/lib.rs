//! Driver Registry API
//!
//! A Rust-based microservice for managing custom database drivers and their
//! JAR files, following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
