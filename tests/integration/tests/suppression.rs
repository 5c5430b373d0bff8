//! End-to-end suppression resolution scenarios.
//!
//! Problems enter as the rule-execution engine would hand them over
//! (location-ordered, with extra fields attached) and directives as
//! the comment scanner produces them.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use sumilint_core::{
    Directive, DirectiveKind, Problem, ReportUnused, Severity, SuppressError, apply_suppressions,
};

fn problem(rule_id: &str, line: u32, column: u32) -> Problem {
    Problem::new(rule_id, format!("{rule_id} reported"), line, column)
}

fn unused(rule: Option<&str>, line: u32, column: u32) -> Problem {
    Problem {
        rule_id: None,
        message: match rule {
            Some(rule) => format!(
                "Unused eslint-disable directive (no problems were reported from '{rule}')."
            ),
            None => "Unused eslint-disable directive (no problems were reported).".to_string(),
        },
        line,
        column,
        severity: Severity::Error,
        node_type: None,
        extra: serde_json::Map::new(),
    }
}

#[test]
fn empty_directive_list_returns_problems_unchanged() {
    let problems = vec![problem("foo", 1, 1), problem("bar", 1, 2), problem("foo", 9, 9)];

    let result = apply_suppressions(problems.clone(), &[], ReportUnused::Error);

    assert_eq!(result, problems);
}

#[test]
fn problems_before_every_directive_are_always_kept() {
    let directives = vec![Directive::new(DirectiveKind::Disable, 1, 8)];

    let result = apply_suppressions(vec![problem("foo", 1, 7)], &directives, ReportUnused::Off);

    assert_eq!(result, vec![problem("foo", 1, 7)]);
}

#[test]
fn directive_at_identical_location_suppresses_the_problem() {
    let directives = vec![Directive::new(DirectiveKind::Disable, 1, 8)];
    let mut tied = problem("x", 1, 8);
    tied.rule_id = None;

    let result = apply_suppressions(vec![tied], &directives, ReportUnused::Off);

    assert_eq!(result, vec![]);
}

#[test]
fn rule_redisabled_after_brief_exemption_stays_suppressed() {
    let directives = vec![
        Directive::new(DirectiveKind::Disable, 1, 1),
        Directive::new(DirectiveKind::Enable, 1, 5).with_rule("foo"),
        Directive::new(DirectiveKind::Disable, 2, 1).with_rule("foo"),
    ];

    let result = apply_suppressions(vec![problem("foo", 3, 3)], &directives, ReportUnused::Off);

    assert_eq!(result, vec![]);
}

#[test]
fn unused_blanket_disable_is_reported_at_its_own_location() {
    let directives = vec![Directive::new(DirectiveKind::Disable, 1, 5)];

    let result = apply_suppressions(vec![], &directives, ReportUnused::Error);

    assert_eq!(result, vec![unused(None, 1, 5)]);
}

#[rstest]
#[case(DirectiveKind::DisableLine, 1, true)]
#[case(DirectiveKind::DisableLine, 2, false)]
#[case(DirectiveKind::DisableNextLine, 2, true)]
#[case(DirectiveKind::DisableNextLine, 1, false)]
#[case(DirectiveKind::DisableNextLine, 3, false)]
fn line_directives_cover_exactly_one_line(
    #[case] kind: DirectiveKind,
    #[case] problem_line: u32,
    #[case] suppressed: bool,
) {
    let directives = vec![Directive::new(kind, 1, 5)];
    let problems = vec![problem("foo", problem_line, 10)];

    let result = apply_suppressions(problems.clone(), &directives, ReportUnused::Off);

    if suppressed {
        assert_eq!(result, vec![]);
    } else {
        assert_eq!(result, problems);
    }
}

#[test]
fn attribution_reversal_reports_only_the_superseded_directive() {
    let directives = vec![
        Directive::new(DirectiveKind::Disable, 1, 1).with_rule("foo"),
        Directive::new(DirectiveKind::Disable, 2, 1),
    ];

    let result = apply_suppressions(vec![problem("foo", 3, 1)], &directives, ReportUnused::Error);

    assert_eq!(result, vec![unused(Some("foo"), 1, 1)]);
}

#[test]
fn scoped_enable_inside_blanket_keeps_only_the_exempted_rule() {
    let directives = vec![
        Directive::new(DirectiveKind::Disable, 1, 1),
        Directive::new(DirectiveKind::Enable, 2, 1).with_rule("foo"),
    ];
    let problems = vec![problem("bar", 3, 1), problem("foo", 3, 4), problem("baz", 3, 9)];

    let result = apply_suppressions(problems, &directives, ReportUnused::Off);

    assert_eq!(result, vec![problem("foo", 3, 4)]);
}

#[test]
fn used_directive_is_not_reported_and_survivors_pass_through() {
    let directives = vec![Directive::new(DirectiveKind::Disable, 1, 1).with_rule("foo")];
    let survivor = problem("not-foo", 1, 20)
        .with_severity(Severity::Warning)
        .with_extra("end_column", json!(25));

    let result = apply_suppressions(
        vec![survivor.clone(), problem("foo", 2, 1)],
        &directives,
        ReportUnused::Error,
    );

    // Only the survivor remains, every field untouched.
    assert_eq!(result, vec![survivor]);
}

#[test]
fn quiet_mode_output_is_exactly_the_filtered_list() {
    let directives = vec![
        Directive::new(DirectiveKind::Disable, 1, 1).with_rule("never-reported"),
        Directive::new(DirectiveKind::DisableNextLine, 4, 1),
    ];
    let problems = vec![problem("foo", 2, 1), problem("bar", 5, 1), problem("baz", 7, 1)];

    let result = apply_suppressions(problems, &directives, ReportUnused::Off);

    assert_eq!(result, vec![problem("foo", 2, 1), problem("baz", 7, 1)]);
}

#[test]
fn merged_output_is_location_ordered() {
    let directives = vec![
        Directive::new(DirectiveKind::Disable, 4, 1).with_rule("unused"),
        Directive::new(DirectiveKind::DisableLine, 6, 3).with_rule("also-unused"),
    ];
    let problems = vec![problem("foo", 2, 1), problem("bar", 8, 1)];

    let result = apply_suppressions(problems, &directives, ReportUnused::Error);

    assert_eq!(
        result,
        vec![
            problem("foo", 2, 1),
            unused(Some("unused"), 4, 1),
            unused(Some("also-unused"), 6, 3),
            problem("bar", 8, 1),
        ]
    );
}

#[test]
fn resolution_is_deterministic() {
    let directives = vec![
        Directive::new(DirectiveKind::DisableNextLine, 1, 1).with_rule("foo"),
        Directive::new(DirectiveKind::Disable, 3, 1),
        Directive::new(DirectiveKind::Enable, 5, 1).with_rule("bar"),
        Directive::new(DirectiveKind::Disable, 6, 1).with_rule("bar"),
    ];
    let problems = vec![
        problem("foo", 2, 1),
        problem("bar", 4, 1),
        problem("bar", 5, 5),
        problem("baz", 7, 1),
        problem("bar", 7, 2),
    ];

    let first = apply_suppressions(problems.clone(), &directives, ReportUnused::Error);
    let second = apply_suppressions(problems, &directives, ReportUnused::Error);

    assert_eq!(first, second);
}

#[test]
fn unrecognized_directive_kind_fails_before_resolution() {
    let raw = json!([
        { "kind": "disable", "line": 1, "column": 1 },
        { "kind": "disable-banana", "line": 2, "column": 1 }
    ]);

    let parsed = serde_json::from_value::<Vec<Directive>>(raw);
    assert!(parsed.is_err(), "bad kind must not construct directives");

    let err = "disable-banana".parse::<DirectiveKind>().unwrap_err();
    assert_eq!(
        err,
        SuppressError::UnrecognizedKind("disable-banana".to_string())
    );
}
