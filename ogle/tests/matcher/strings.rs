use ogle::matcher::{has_substr, matches_regexp, Matcher, MatchesRegexp};
use ogle::{Error, Outcome, Verdict};

#[test]
fn empty_substring() {
    assert_eq!(has_substr("").check("asdf"), Outcome::matched());
    assert_eq!(has_substr("").check(""), Outcome::matched());
}

#[test]
fn substring_of_owned_strings() {
    let m = has_substr("rri");

    assert!(m.check(&String::from("burrito")).is_match());
    assert_eq!(m.check(&Some(17)).verdict, Verdict::Undefined);
    assert_eq!(m.describe(), "has substring \"rri\"");
}

#[test]
fn regexp_scenario() {
    let o = matches_regexp("fo[op]\\s+x").check("blah blah foo x blah blah");

    assert_eq!(o, Outcome::matched());
}

#[test]
fn regexp_on_bytes() {
    let m = matches_regexp("^ta.o$");

    assert!(m.check(b"taco").is_match());
    assert!(m.check(&b"tako".to_vec()).is_match());
    assert!(m.check(&b"burrito"[..]).verdict == Verdict::False);

    let o = m.check(&vec![1_u16, 2]);
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is not a string or byte slice");
}

#[test]
fn invalid_regexp() {
    let err = MatchesRegexp::try_new("[a-").err();

    assert!(matches!(err, Some(Error::InvalidPattern(_))));
}

#[test]
#[should_panic(expected = "invalid regular expression")]
fn invalid_regexp_panics() {
    let _ = matches_regexp("(taco");
}
