use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use ogle::matcher::{
    deep_equals, equals, has_same_type_as, identical_to, pointee, strict_equals, Matcher,
};
use ogle::types::Nil;
use ogle::{Outcome, Reflect, Verdict};

#[test]
fn deep_equals_scenario() {
    let m = deep_equals(Vec::<u8>::new());

    assert_eq!(m.check(&Vec::<u8>::new()), Outcome::matched());

    let o = m.check("taco");
    assert_eq!(o.verdict, Verdict::False);
    assert!(o.is_fatal());
    assert_eq!(o.diagnostic.clause(), "which is of type str");
}

#[derive(Reflect)]
struct Order {
    id: u32,
    items: Vec<String>,
    extras: BTreeMap<String, u8>,
    parent: Option<Box<Order>>,
}

fn order(id: u32) -> Order {
    Order {
        id,
        items: vec!["taco".into(), "burrito".into()],
        extras: [("salsa".to_owned(), 2)].into_iter().collect(),
        parent: None,
    }
}

#[test]
fn deep_equals_structs() {
    let mut expected = order(1);
    expected.parent = Some(Box::new(order(0)));

    let mut actual = order(1);
    actual.parent = Some(Box::new(order(0)));

    let m = deep_equals(&expected);
    assert_eq!(m.check(&actual), Outcome::matched());

    actual.parent = Some(Box::new(order(2)));
    assert_eq!(m.check(&actual).verdict, Verdict::False);
    assert!(m.check(&order(1)).verdict == Verdict::False);
}

#[test]
fn deep_equals_maps() {
    let a: HashMap<String, Vec<i32>> = (0..20).map(|i| (i.to_string(), vec![i])).collect();
    let b: HashMap<String, Vec<i32>> = (0..20).rev().map(|i| (i.to_string(), vec![i])).collect();

    assert!(deep_equals(&a).check(&b).is_match());
    assert!(!deep_equals(&a).check(&HashMap::<String, Vec<i32>>::new()).is_match());
}

#[test]
fn same_type() {
    let m = has_same_type_as(order(1));

    assert!(m.check(&order(2)).is_match());
    assert_eq!(m.describe(), "has type Order");

    let o = m.check(&17);
    assert_eq!(o, Outcome::mismatch("which is of type i32"));
}

#[test]
fn strict_equals_requires_same_type() {
    assert!(strict_equals(17_u8).check(&17_u8).is_match());
    assert!(strict_equals("taco").check("taco").is_match());
    assert_eq!(strict_equals(17_u8).describe(), "strictly equals 17");

    let o = strict_equals(17_u8).check(&17_u16);
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is of type u16");
}

#[test]
fn identical_to_references() {
    let a = Rc::new(17);
    let b = Rc::new(17);

    let m = identical_to(a.clone());
    assert!(m.check(&a).is_match());
    assert!(!m.check(&b).is_match());

    let none: Option<Rc<i32>> = None;
    assert!(identical_to(&none).check(&none).is_match());
}

#[test]
fn identical_to_pointers_to_structs() {
    let rc = Rc::new(order(1));
    let other = Rc::new(order(1));

    let m = identical_to(rc.clone());
    assert!(m.check(&rc).is_match());
    assert_eq!(m.check(&other).verdict, Verdict::False);

    let boxed = Some(Box::new(order(2)));
    assert!(identical_to(&boxed).check(&boxed).is_match());
}

#[test]
fn nested_options_keep_inner_nil() {
    let some_none: Option<Option<i32>> = Some(None);
    let none: Option<Option<i32>> = None;

    assert!(!some_none.reflect().is_nil());
    assert!(none.reflect().is_nil());

    assert_eq!(deep_equals(&some_none).check(&none).verdict, Verdict::False);
    assert!(deep_equals(&some_none).check(&Some(None::<i32>)).is_match());
    assert_eq!(strict_equals(&some_none).check(&none).verdict, Verdict::False);
    assert!(strict_equals(&some_none).check(&some_none).is_match());

    assert_eq!(equals(Nil).check(&some_none).verdict, Verdict::False);
    assert!(equals(Nil).check(&none).is_match());
    assert!(pointee(equals(Nil)).check(&some_none).is_match());

    let o = pointee(equals(Nil)).check(&none);
    assert_eq!(o.verdict, Verdict::Undefined);
    assert_eq!(o.diagnostic.clause(), "which is a nil pointer");
}

#[test]
#[should_panic(expected = "IdenticalTo")]
fn identical_to_struct_panics() {
    let _ = identical_to(order(1));
}

#[test]
#[should_panic(expected = "IdenticalTo")]
fn identical_to_container_of_structs_panics() {
    let _ = identical_to(vec![order(1)]);
}
