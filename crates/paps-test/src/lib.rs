//! Shared test fixtures for PAPS crates.
//!
//! This crate provides substitute tables and measurement presets for
//! testing. `paps-core` keeps its own in-crate fixtures, since depending on
//! this crate from there would be circular.
//!
//! - [`tables`] - Small hand-built criteria tables
//! - [`measurements`] - Measurement presets for first-year middle-school boys
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! paps-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use paps_test::measurements::{good_middle1_male, poor_middle1_male};
//! use paps_test::tables::sparse_table;
//! ```

pub mod measurements;
pub mod tables;

pub use measurements::{good_middle1_male, mixed_middle1_male, poor_middle1_male};
pub use tables::{middle1_male_table, sparse_table};
