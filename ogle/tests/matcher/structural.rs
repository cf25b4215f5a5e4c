use std::error::Error as StdError;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::panic::panic_any;
use std::sync::Arc;

use ogle::matcher::{
    contains, error, greater_than, has_substr, panics, pointee, Matcher,
};
use ogle::types::{func, Nil};
use ogle::{elements_are, Outcome, Value, Verdict};

#[test]
fn elements_are_promotes_values() {
    let m = elements_are![1, greater_than(1), "taco"];

    assert_eq!(m.describe(), "elements are: [1, greater than 1, \"taco\"]");
    assert!(!m.check(&vec![1, 2, 3]).is_match());

    let o = m.check(&vec![1, 2]);
    assert_eq!(o.verdict, Verdict::False);
    assert_eq!(o.diagnostic.clause(), "which is of length 2");

    let o = m.check(&vec![1, 2, 3]);
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(
        o.diagnostic.clause(),
        "whose element 2 doesn't match: which is not a string"
    );
}

#[test]
fn elements_are_arrays_and_slices() {
    let m = elements_are![1.5, 2];

    assert_eq!(m.check(&[1.5_f32, 2.0]), Outcome::matched());
    assert_eq!(m.check(&[1.5, 2.0][..]), Outcome::matched());

    let o = m.check(&(1.5, 2));
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is not an array or slice");
}

#[test]
fn contains_element() {
    let m = contains(has_substr("ac"));

    assert!(m.check(&vec!["burrito", "taco"]).is_match());
    assert!(!m.check(&["burrito"]).is_match());
    assert_eq!(m.describe(), "contains: has substring \"ac\"");
}

#[test]
fn contains_nil_is_fatal() {
    let o = contains("x").check(&Nil);

    assert_eq!(o.verdict, Verdict::Undefined);
    assert!(o.is_fatal());
}

#[test]
fn pointee_of_shared_pointer() {
    let m = pointee(has_substr("taco"));

    assert!(m.check(&Arc::new(String::from("tacos"))).is_match());
    assert_eq!(m.describe(), "pointee(has substring \"taco\")");

    let none: Option<Arc<String>> = None;
    let o = m.check(&none);
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is a nil pointer");
}

fn no_panic() {}

fn panic_17() {
    panic_any(17_i32);
}

struct Blah;

impl Matcher for Blah {
    fn matches(&self, _candidate: &Value) -> Outcome {
        Outcome::mismatch("which blah")
    }

    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("blah")
    }
}

#[test]
fn panics_scenario() {
    let o = panics(17).check(&(no_panic as fn()));
    assert_eq!(o, Outcome::mismatch("which didn't panic"));

    let o = panics(17).check(&(panic_17 as fn()));
    assert_eq!(o, Outcome::matched());

    let o = panics(Blah).check(&(panic_17 as fn()));
    assert_eq!(o.verdict, Verdict::False);
    assert!(!o.is_fatal());
    assert_eq!(o.diagnostic.clause(), "which panicked with: 17, which blah");
}

#[test]
fn panics_with_message() {
    let m = panics(has_substr("taco"));

    assert!(m.check(&func(|| panic!("no taco for {}", "you"))).is_match());

    let o = m.check(&func(|| panic!("burrito")));
    assert_eq!(o.verdict, Verdict::False);
    assert_eq!(o.diagnostic.clause(), "which panicked with: \"burrito\"");

    let o = m.check(&func(|| panic_any(17_u8)));
    assert_eq!(o.verdict, Verdict::Undefined);
    assert!(o.is_fatal());
    assert_eq!(
        o.diagnostic.clause(),
        "which panicked with: 17, which is not a string"
    );

    let o = m.check(&func(|| panic_any(vec![1, 2])));
    assert_eq!(o.diagnostic.clause(), "which panicked with: Box<dyn Any>, which is not a string");
}

#[derive(Debug)]
struct TacoError;

impl Display for TacoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("out of tacos")
    }
}

impl StdError for TacoError {}

#[test]
fn error_message() {
    let err: Box<dyn StdError + Send + Sync> = Box::new(TacoError);
    let m = error(has_substr("tacos"));

    assert!(m.check(&err).is_match());
    assert!(m.check(&*err).is_match());
    assert_eq!(m.describe(), "error has substring \"tacos\"");

    let o = m.check("out of tacos");
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is not an error");
}
