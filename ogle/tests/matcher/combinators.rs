use std::fmt::{Formatter, Result as FmtResult};

use ogle::matcher::{all_of, equals, greater_than, has_substr, less_than, not, Matcher};
use ogle::{all_of, any_of, Diagnostic, Outcome, Value, Verdict};

struct Fake {
    desc: &'static str,
    outcome: Outcome,
}

fn fake(desc: &'static str, verdict: Verdict, clause: &'static str) -> Fake {
    Fake {
        desc,
        outcome: Outcome::new(verdict, Diagnostic::new(clause)),
    }
}

fn fatal(verdict: Verdict, clause: &'static str) -> Fake {
    Fake {
        desc: "",
        outcome: Outcome::new(verdict, Diagnostic::fatal(clause)),
    }
}

impl Matcher for Fake {
    fn matches(&self, _candidate: &Value) -> Outcome {
        self.outcome.clone()
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.desc)
    }
}

#[test]
fn all_of_description() {
    let m = all_of![
        fake("taco", Verdict::False, ""),
        fake("burrito", Verdict::False, ""),
    ];

    assert_eq!(m.describe(), "taco, and burrito");
}

#[test]
fn empty_all_of_matches() {
    let o = all_of(Vec::new()).check(&17);

    assert_eq!(o, Outcome::matched());
}

#[test]
fn any_of_scenario() {
    let m = any_of![
        fatal(Verdict::Undefined, "foo"),
        17,
        fake("", Verdict::False, "foo"),
        fake("", Verdict::True, ""),
    ];

    assert_eq!(m.check(&0), Outcome::matched());
}

#[test]
fn any_of_promotes_values() {
    let m = any_of![17, "taco", greater_than(100)];

    assert_eq!(m.describe(), "or(17, \"taco\", greater than 100)");
    assert!(m.check(&17_u8).is_match());
    assert!(m.check(&101.5).is_match());
    assert!(m.check("taco").is_match());

    let o = m.check("burrito");
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is not numeric");
}

#[test]
fn all_of_range() {
    let m = all_of![greater_than(1), less_than(10), not(5)];

    assert!(m.check(&2).is_match());
    assert!(!m.check(&5).is_match());
    assert_eq!(m.check(&10).verdict, Verdict::False);
    assert_eq!(m.describe(), "greater than 1, and less than 10, and not(5)");

    let o = m.check("taco");
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is not comparable");
}

#[test]
fn all_of_prefers_fatal_clause() {
    let m = all_of![
        fake("", Verdict::False, "which blah"),
        fatal(Verdict::False, "which is of type str"),
    ];

    let o = m.check(&17);
    assert_eq!(o.verdict, Verdict::False);
    assert!(o.is_fatal());
    assert_eq!(o.diagnostic.clause(), "which is of type str");
}

#[test]
fn double_negation_is_identity() {
    fn matchers() -> Vec<Box<dyn Matcher>> {
        vec![
            Box::new(equals(17)),
            Box::new(greater_than(3)),
            Box::new(has_substr("ac")),
            Box::new(fake("", Verdict::False, "which blah")),
            Box::new(fatal(Verdict::False, "which is of type str")),
            Box::new(fatal(Verdict::Undefined, "which is not numeric")),
        ]
    }

    let candidates = [
        Value::of(&17),
        Value::of("taco"),
        Value::of(&vec![1.5]),
        Value::nil(),
    ];

    for (m, twice) in matchers().into_iter().zip(matchers().into_iter().map(|m| not(not(m)))) {
        for c in &candidates {
            assert_eq!(twice.matches(c), m.matches(c), "{} on {c}", m.describe());
        }
    }
}
