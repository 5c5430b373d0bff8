//! Suppression resolution coordinator.

use serde::{Deserialize, Serialize};
use sumilint_diagnostics::{Problem, Severity, compare_locations};
use tracing::debug;

use crate::directive::{Directive, normalize};
use crate::scan::{ScanOutcome, scan};
use crate::unused::unused_directive_problems;

/// Whether, and how loudly, to report disable directives that
/// suppressed nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportUnused {
    /// No synthetic diagnostics; output is exactly the filtered
    /// problem list.
    #[default]
    Off,
    /// Report unused directives as warnings.
    Warn,
    /// Report unused directives as errors.
    Error,
}

impl ReportUnused {
    fn severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

/// Applies suppression directives to a file's reported problems.
///
/// `problems` must be sorted ascending by (line, column); directives
/// may arrive in any order. Block directives are applied first, then
/// the expanded line directives over the survivors of the first pass.
/// Collapsing the two passes into one directive stream would change
/// behavior for overlapping block and line directives, so the order is
/// fixed. The result is sorted by location; surviving problems come
/// through with every field untouched.
pub fn apply_suppressions(
    problems: Vec<Problem>,
    directives: &[Directive],
    report_unused: ReportUnused,
) -> Vec<Problem> {
    debug!(
        "Resolving {} problems against {} suppression directives",
        problems.len(),
        directives.len()
    );

    let (block_directives, line_directives) = normalize(directives);

    let ScanOutcome {
        kept,
        directives: block_directives,
        used: block_used,
    } = scan(problems, block_directives);

    let ScanOutcome {
        kept: mut result,
        directives: line_directives,
        used: line_used,
    } = scan(kept, line_directives);

    if let Some(severity) = report_unused.severity() {
        result.extend(unused_directive_problems(
            &block_directives,
            &block_used,
            severity,
        ));
        result.extend(unused_directive_problems(
            &line_directives,
            &line_used,
            severity,
        ));
        result.sort_by(|a, b| compare_locations(a, b));
    }

    debug!("{} problems survive suppression", result.len());
    result
}
