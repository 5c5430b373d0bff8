//! # sumilint_diagnostics
//!
//! Diagnostic data model shared across the SumiLint workspace.
//!
//! This crate provides:
//! - The [`Problem`] type: one reported rule violation at a source location
//! - The [`Severity`] scale for diagnostics
//! - Source-location ordering via [`Located`] and [`compare_locations`]

mod location;
mod problem;

pub use location::{Located, compare_locations};
pub use problem::{Problem, Severity};
