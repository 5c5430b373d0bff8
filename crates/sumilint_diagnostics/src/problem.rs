//! Problem types for lint results.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::location::Located;

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

/// One reported rule violation at a source location.
///
/// Problems are produced by the rule-execution engine and consumed once
/// by the suppression engine, which only decides inclusion or exclusion
/// and never rewrites their fields. Fields beyond the known ones are
/// kept in `extra` and round-trip through serialization untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// The rule that reported this problem, or `None` for problems the
    /// linter itself synthesizes (e.g. unused-suppression diagnostics).
    pub rule_id: Option<String>,

    /// The problem message.
    pub message: String,

    /// Line number (1-indexed).
    pub line: u32,

    /// Column number (1-indexed).
    pub column: u32,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,

    /// AST node type the problem was reported on, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    /// Caller-defined fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Problem {
    /// Creates a new problem.
    pub fn new(
        rule_id: impl Into<String>,
        message: impl Into<String>,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            rule_id: Some(rule_id.into()),
            message: message.into(),
            line,
            column,
            severity: Severity::Error,
            node_type: None,
            extra: Map::new(),
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the AST node type.
    pub fn with_node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    /// Attaches a caller-defined field.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl Located for Problem {
    fn line(&self) -> u32 {
        self.line
    }

    fn column(&self) -> u32 {
        self.column
    }
}
