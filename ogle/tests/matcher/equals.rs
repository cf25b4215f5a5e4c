use std::rc::Rc;

use ogle::matcher::{equals, Matcher};
use ogle::types::{func, Complex, Nil};
use ogle::Verdict;

#[test]
fn twos_complement_is_not_equal() {
    let o = equals(-17_i8).check(&239_u8);

    assert_eq!(o.verdict, Verdict::False);
    assert!(o.diagnostic.is_empty());
}

#[test]
fn integers_of_any_width() {
    let m = equals(-17_i8);

    assert_eq!(m.check(&-17_i16).verdict, Verdict::True);
    assert_eq!(m.check(&-17_i64).verdict, Verdict::True);
    assert_eq!(m.check(&-17_isize).verdict, Verdict::True);
    assert_eq!(m.check(&-17.0_f32).verdict, Verdict::True);
    assert_eq!(m.check(&Complex::new(-17.0_f64, 0.0)).verdict, Verdict::True);
    assert_eq!(m.check(&Complex::new(-17.0_f64, 1.0)).verdict, Verdict::False);
}

#[test]
fn float64_precision() {
    let m = equals((1_i64 << 54) + 1);

    assert_eq!(m.check(&((1_u64 << 54) as f64)).verdict, Verdict::True);
    assert_eq!(m.check(&(((1_u64 << 54) + 3) as f64)).verdict, Verdict::False);
}

#[test]
fn float32_precision() {
    let m = equals(16_777_217_i32);

    assert_eq!(m.check(&16_777_216.0_f32).verdict, Verdict::True);
    assert_eq!(m.check(&16_777_216.0_f64).verdict, Verdict::False);
}

#[test]
fn float32_beyond_integer_range() {
    let m = equals(2_f32.powi(65));

    assert_eq!(m.check(&2_f64.powi(65)).verdict, Verdict::True);
    assert_eq!(m.check(&Complex::new(2_f64.powi(65), 0.0)).verdict, Verdict::True);
    assert_eq!(m.check(&i64::MAX).verdict, Verdict::False);
}

#[test]
fn non_numeric_candidates() {
    for o in [
        equals(17).check("17"),
        equals(17).check(&true),
        equals(17.5).check(&vec![17.5]),
    ] {
        assert_eq!(o.verdict, Verdict::Undefined);
        assert!(o.is_fatal());
        assert_eq!(o.diagnostic.clause(), "which is not numeric");
    }
}

#[test]
fn strings() {
    let m = equals("taco");

    assert_eq!(m.check("taco").verdict, Verdict::True);
    assert_eq!(m.check(&String::from("taco")).verdict, Verdict::True);
    assert_eq!(m.check("burrito").verdict, Verdict::False);
    assert_eq!(m.check(&'t').verdict, Verdict::Undefined);
}

#[test]
fn untyped_nil() {
    let m = equals(Nil);
    let none: Option<Box<i32>> = None;
    let empty: Option<Vec<u8>> = None;

    assert_eq!(m.describe(), "is nil");
    assert_eq!(m.check(&none).verdict, Verdict::True);
    assert_eq!(m.check(&empty).verdict, Verdict::True);
    assert_eq!(m.check(&Nil).verdict, Verdict::True);
    assert_eq!(m.check(&Some(Box::new(17))).verdict, Verdict::False);
    assert_eq!(m.check(&vec![1_u8]).verdict, Verdict::False);

    let o = m.check(&17);
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which cannot be compared to nil");
}

#[test]
fn typed_nil() {
    let none: Option<Box<i32>> = None;
    let m = equals(&none);

    assert_eq!(m.describe(), "is nil");
    assert_eq!(m.check(&none).verdict, Verdict::True);
    assert_eq!(m.check(&Some(Box::new(17))).verdict, Verdict::False);
    assert_eq!(m.check(&Nil).verdict, Verdict::True);

    let other: Option<Box<u32>> = None;
    let o = m.check(&other);
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is not a Option<Box<i32>>");
}

#[test]
fn typed_nil_against_same_kind() {
    let m = equals(None::<Vec<i32>>);

    let o = m.check(&vec![1, 2]);
    assert_eq!(o.verdict, Verdict::False);
    assert!(!o.is_fatal());
    assert_eq!(m.check(&Vec::<i32>::new()).verdict, Verdict::False);
    assert_eq!(m.check(&None::<Vec<i32>>).verdict, Verdict::True);

    let o = m.check(&vec!["taco"]);
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is not a Option<Vec<i32>>");
}

#[test]
fn pointers_by_address() {
    let a = Rc::new(17);
    let b = Rc::new(17);

    let m = equals(a.clone());
    assert_eq!(m.check(&a).verdict, Verdict::True);
    assert_eq!(m.check(&b).verdict, Verdict::False);
}

#[test]
fn functions_by_address() {
    let f = func(|| ());
    let g = func(|| ());

    let m = equals(f.clone());
    assert_eq!(m.check(&f).verdict, Verdict::True);
    assert_eq!(m.check(&g).verdict, Verdict::False);

    let o = m.check(&17);
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is not a function");
}

#[test]
#[should_panic(expected = "Equals")]
fn structs_panic() {
    #[derive(ogle::Reflect)]
    struct Point {
        x: i32,
    }

    let _ = equals(Point { x: 1 });
}
