//! The directive scan engine.
//!
//! A single forward merge over one location-ordered problem stream and
//! one directive stream. Directives located at or before a problem are
//! applied to the suppression state before the problem is judged, so a
//! directive tied with a problem on location wins.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use sumilint_diagnostics::{Problem, compare_locations};

use crate::directive::{BlockDirective, BlockKind};

/// What one scan pass produced: the surviving problems, the directives
/// in the order the scan consumed them, and a usage flag per directive
/// (meaningful only for disables).
pub(crate) struct ScanOutcome<'a> {
    pub kept: Vec<Problem>,
    pub directives: Vec<BlockDirective<'a>>,
    pub used: Vec<bool>,
}

/// Suppression state at one point of the scan.
///
/// Directive indices refer to the sorted directive list and identify
/// the disable directive credited with each suppression. The two
/// variants keep the exemption set tied to a live blanket disable;
/// there is no state in which exemptions exist without one.
enum ScanState<'a> {
    /// No blanket disable in effect. `disabled` maps each individually
    /// disabled rule to the directive that disabled it; empty means
    /// fully unrestricted.
    Enabled { disabled: HashMap<&'a str, usize> },
    /// A blanket disable is in effect. Rules in `exempted` were
    /// re-enabled afterwards; rules in `overrides` were re-disabled by
    /// a later, more specific directive which then takes the credit.
    AllDisabled {
        credited_to: usize,
        exempted: HashSet<&'a str>,
        overrides: HashMap<&'a str, usize>,
    },
}

impl<'a> ScanState<'a> {
    fn new() -> Self {
        Self::Enabled {
            disabled: HashMap::new(),
        }
    }

    /// Applies one directive transition.
    ///
    /// A fresh blanket disable discards all per-rule attribution: it
    /// supersedes every earlier directive, and only later per-rule
    /// disables may re-pin credit for a specific rule.
    fn apply(&mut self, index: usize, directive: &BlockDirective<'a>) {
        match (directive.kind, directive.rule_id) {
            (BlockKind::Disable, None) => {
                *self = Self::AllDisabled {
                    credited_to: index,
                    exempted: HashSet::new(),
                    overrides: HashMap::new(),
                };
            }
            (BlockKind::Disable, Some(rule)) => match self {
                Self::Enabled { disabled } => {
                    disabled.insert(rule, index);
                }
                Self::AllDisabled {
                    exempted,
                    overrides,
                    ..
                } => {
                    exempted.remove(rule);
                    overrides.insert(rule, index);
                }
            },
            (BlockKind::Enable, None) => {
                *self = Self::new();
            }
            (BlockKind::Enable, Some(rule)) => match self {
                Self::Enabled { disabled } => {
                    disabled.remove(rule);
                }
                Self::AllDisabled {
                    exempted,
                    overrides,
                    ..
                } => {
                    exempted.insert(rule);
                    overrides.remove(rule);
                }
            },
        }
    }

    /// Judges a problem: `None` keeps it, `Some(index)` suppresses it
    /// and credits the directive at `index`.
    fn suppressed_by(&self, rule_id: Option<&str>) -> Option<usize> {
        match self {
            Self::Enabled { disabled } => rule_id.and_then(|rule| disabled.get(rule).copied()),
            Self::AllDisabled {
                credited_to,
                exempted,
                overrides,
            } => match rule_id {
                Some(rule) if exempted.contains(rule) => None,
                Some(rule) => Some(overrides.get(rule).copied().unwrap_or(*credited_to)),
                None => Some(*credited_to),
            },
        }
    }
}

/// Runs one scan pass over pre-sorted problems.
///
/// Directives may arrive in any order; the engine sorts them itself.
/// Problem ordering is a caller precondition and is not checked.
pub(crate) fn scan<'a>(
    problems: Vec<Problem>,
    mut directives: Vec<BlockDirective<'a>>,
) -> ScanOutcome<'a> {
    directives.sort_by(|a, b| compare_locations(a, b));

    let mut state = ScanState::new();
    let mut used = vec![false; directives.len()];
    let mut kept = Vec::with_capacity(problems.len());
    let mut next = 0;

    for problem in problems {
        while next < directives.len()
            && compare_locations(&directives[next], &problem) != Ordering::Greater
        {
            state.apply(next, &directives[next]);
            next += 1;
        }

        match state.suppressed_by(problem.rule_id.as_deref()) {
            Some(index) => used[index] = true,
            None => kept.push(problem),
        }
    }

    ScanOutcome {
        kept,
        directives,
        used,
    }
}
