use ogle::matcher::{greater_or_equal, greater_than, less_or_equal, less_than, not, Matcher};
use ogle::Verdict;
use proptest::prelude::*;

#[test]
fn strings_compare_by_bytes() {
    let m = less_than("foo\0");

    assert_eq!(m.check("foo").verdict, Verdict::True);
    assert_eq!(m.check("fooa").verdict, Verdict::False);
    assert_eq!(greater_than("a").check("b").verdict, Verdict::True);
    assert_eq!(greater_or_equal("b").check(&String::from("b")).verdict, Verdict::True);
}

#[test]
fn mixed_numbers() {
    assert_eq!(less_than(-1).check(&0_u64).verdict, Verdict::False);
    assert_eq!(greater_than(-1).check(&u64::MAX).verdict, Verdict::True);
    assert_eq!(less_or_equal(17.5_f32).check(&17).verdict, Verdict::True);
    assert_eq!(greater_than(17).check(&17.25).verdict, Verdict::True);
}

#[test]
fn float32_rounding_window() {
    let big = (1_i32 << 25) + 1;

    assert_eq!(less_than(big).check(&(big as f32)).verdict, Verdict::False);
    assert_eq!(
        less_than(big as f32).check(&((1_i32 << 25) - 1)).verdict,
        Verdict::False
    );
}

#[test]
fn not_comparable() {
    for o in [
        less_than(17).check("17"),
        less_than("17").check(&17),
        greater_or_equal(1).check(&true),
        greater_than(1).check(&ogle::types::Complex::new(2.0_f32, 0.0)),
    ] {
        assert_eq!(o.verdict, Verdict::Undefined);
        assert!(o.is_fatal());
        assert_eq!(o.diagnostic.clause(), "which is not comparable");
    }

    let o = not(greater_than(17)).check("taco");
    assert_eq!(o.verdict, Verdict::Undefined);
}

#[test]
#[should_panic(expected = "expected an integer, float or string")]
fn complex_limit_panics() {
    let _ = less_than(ogle::types::Complex::new(1.0_f64, 0.0));
}

proptest! {
    #[test]
    fn greater_than_is_not_less_or_equal(x in any::<i64>(), c in any::<f64>()) {
        let gt = greater_than(x).check(&c).verdict;
        let le = less_or_equal(x).check(&c).verdict;

        prop_assert_eq!(gt == Verdict::True, le == Verdict::False);
    }

    #[test]
    fn greater_or_equal_is_not_less_than(x in any::<f32>(), c in any::<i32>()) {
        let ge = greater_or_equal(x).check(&c).verdict;
        let lt = less_than(x).check(&c).verdict;

        prop_assert_eq!(ge == Verdict::True, lt == Verdict::False);
    }

    #[test]
    fn strings_are_ordered_like_bytes(a in ".*", b in ".*") {
        prop_assert_eq!(less_than(a.as_str()).check(b.as_str()).is_match(), b.as_bytes() < a.as_bytes());
    }
}
