//! Suppression directive types and normalization.
//!
//! The comment scanner hands the engine raw [`Directive`] records in
//! any order. Before scanning they are normalized into block-scoped
//! form: `disable`/`enable` pass through, while the line-scoped kinds
//! are expanded into a disable/enable pair confined to a single line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sumilint_diagnostics::Located;

use crate::error::SuppressError;

/// The kind of a suppression directive.
///
/// Unknown kind strings are rejected at this boundary: both the serde
/// and [`FromStr`] impls fail naming the bad value, so a malformed
/// directive can never reach the scan engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveKind {
    /// Suppresses matching problems from this location on.
    Disable,
    /// Ends the effect of a prior `disable`.
    Enable,
    /// Suppresses matching problems on the directive's own line.
    DisableLine,
    /// Suppresses matching problems on the following line.
    DisableNextLine,
}

impl DirectiveKind {
    /// The directive kind as it appears in source comments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Enable => "enable",
            Self::DisableLine => "disable-line",
            Self::DisableNextLine => "disable-next-line",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirectiveKind {
    type Err = SuppressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disable" => Ok(Self::Disable),
            "enable" => Ok(Self::Enable),
            "disable-line" => Ok(Self::DisableLine),
            "disable-next-line" => Ok(Self::DisableNextLine),
            other => Err(SuppressError::UnrecognizedKind(other.to_string())),
        }
    }
}

/// One suppression instruction derived from a source comment.
///
/// A comment naming multiple rules is represented as multiple
/// same-location directives, one per rule. Two directives may share a
/// location only if they share a kind (comment scanner contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// The directive kind.
    pub kind: DirectiveKind,

    /// The rule this directive targets, or `None` for all rules.
    #[serde(default)]
    pub rule_id: Option<String>,

    /// Line of the directive comment (1-indexed).
    pub line: u32,

    /// Column of the directive comment (1-indexed).
    pub column: u32,
}

impl Directive {
    /// Creates a directive that applies to all rules.
    pub fn new(kind: DirectiveKind, line: u32, column: u32) -> Self {
        Self {
            kind,
            rule_id: None,
            line,
            column,
        }
    }

    /// Restricts the directive to a single rule.
    pub fn with_rule(mut self, rule_id: impl Into<String>) -> Self {
        self.rule_id = Some(rule_id.into());
        self
    }
}

impl Located for Directive {
    fn line(&self) -> u32 {
        self.line
    }

    fn column(&self) -> u32 {
        self.column
    }
}

/// Block-scoped directive kind after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    Disable,
    Enable,
}

/// A directive in block-scoped form.
///
/// `origin` points back at the raw directive so that unused-directive
/// diagnostics report the original comment location rather than the
/// synthetic location of an expanded line directive.
#[derive(Debug, Clone)]
pub(crate) struct BlockDirective<'a> {
    pub kind: BlockKind,
    pub rule_id: Option<&'a str>,
    pub line: u32,
    pub column: u32,
    pub origin: &'a Directive,
}

impl Located for BlockDirective<'_> {
    fn line(&self) -> u32 {
        self.line
    }

    fn column(&self) -> u32 {
        self.column
    }
}

/// Splits raw directives into block-scoped and line-scoped groups,
/// expanding the line-scoped kinds into disable/enable pairs.
///
/// A `disable-line` at line L becomes a disable at (L, 1) and an
/// enable at (L+1, 0), so it covers exactly the problems reported on
/// line L regardless of the comment's own column. `disable-next-line`
/// is the same pair shifted one line down. Neither output list is
/// sorted; the scan engine orders directives itself.
pub(crate) fn normalize(
    directives: &[Directive],
) -> (Vec<BlockDirective<'_>>, Vec<BlockDirective<'_>>) {
    let mut block = Vec::new();
    let mut line = Vec::new();

    for directive in directives {
        match directive.kind {
            DirectiveKind::Disable | DirectiveKind::Enable => block.push(BlockDirective {
                kind: if directive.kind == DirectiveKind::Disable {
                    BlockKind::Disable
                } else {
                    BlockKind::Enable
                },
                rule_id: directive.rule_id.as_deref(),
                line: directive.line,
                column: directive.column,
                origin: directive,
            }),
            DirectiveKind::DisableLine => {
                line.extend(expand_line_pair(directive, directive.line));
            }
            DirectiveKind::DisableNextLine => {
                line.extend(expand_line_pair(directive, directive.line.saturating_add(1)));
            }
        }
    }

    (block, line)
}

/// Builds the disable/enable pair covering exactly `covered_line`.
fn expand_line_pair(origin: &Directive, covered_line: u32) -> [BlockDirective<'_>; 2] {
    [
        BlockDirective {
            kind: BlockKind::Disable,
            rule_id: origin.rule_id.as_deref(),
            line: covered_line,
            column: 1,
            origin,
        },
        BlockDirective {
            kind: BlockKind::Enable,
            rule_id: origin.rule_id.as_deref(),
            line: covered_line.saturating_add(1),
            column: 0,
            origin,
        },
    ]
}
