//! Reporting of disable directives that suppressed nothing.

use serde_json::Map;
use sumilint_diagnostics::{Problem, Severity};

use crate::directive::{BlockDirective, BlockKind};

/// Synthesizes one diagnostic per unused disable directive.
///
/// The diagnostic is reported at the originating comment's location,
/// not at the synthetic location of an expanded line directive, and
/// always carries a null rule id; the directive's own rule id appears
/// only in the message. Enable directives cannot be unused and are
/// never reported.
pub(crate) fn unused_directive_problems(
    directives: &[BlockDirective<'_>],
    used: &[bool],
    severity: Severity,
) -> Vec<Problem> {
    directives
        .iter()
        .zip(used)
        .filter(|(directive, used)| directive.kind == BlockKind::Disable && !**used)
        .map(|(directive, _)| Problem {
            rule_id: None,
            message: match directive.rule_id {
                Some(rule) => format!(
                    "Unused eslint-disable directive (no problems were reported from '{rule}')."
                ),
                None => "Unused eslint-disable directive (no problems were reported).".to_string(),
            },
            line: directive.origin.line,
            column: directive.origin.column,
            severity,
            node_type: None,
            extra: Map::new(),
        })
        .collect()
}
