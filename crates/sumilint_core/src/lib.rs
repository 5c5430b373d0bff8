//! # sumilint_core
//!
//! Suppression-directive resolution engine for SumiLint.
//!
//! Takes the problems reported by the rule-execution engine together
//! with the inline suppression directives extracted from source
//! comments, and decides which problems survive. Optionally reports
//! `disable` directives that suppressed nothing.
//!
//! ## Example
//!
//! ```rust
//! use sumilint_core::{Directive, DirectiveKind, ReportUnused, apply_suppressions};
//! use sumilint_diagnostics::Problem;
//!
//! let problems = vec![Problem::new("no-todo", "Found TODO", 3, 1)];
//! let directives = vec![Directive::new(DirectiveKind::DisableNextLine, 2, 1)];
//!
//! let report = apply_suppressions(problems, &directives, ReportUnused::Off);
//! assert!(report.is_empty());
//! ```

mod directive;
mod error;
mod resolver;
mod scan;
mod unused;

pub use directive::{Directive, DirectiveKind};
pub use error::SuppressError;
pub use resolver::{ReportUnused, apply_suppressions};

pub use sumilint_diagnostics::{Problem, Severity};
