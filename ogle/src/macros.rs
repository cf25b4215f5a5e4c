/// Create an [`AllOf`](crate::matcher::AllOf) matcher from a list of matchers
/// and plain values. Plain values are promoted to
/// [`equals`](crate::matcher::equals) matchers.
///
/// ```
/// use ogle::all_of;
/// use ogle::matcher::{greater_than, less_than, Matcher};
///
/// let m = all_of![greater_than(1), less_than(3.5)];
/// assert!(m.check(&2_u8).is_match());
/// ```
#[macro_export]
macro_rules! all_of {
    ($( $matcher:expr ),* $(,)?) => {
        $crate::matcher::all_of(vec![
            $( $crate::matcher::IntoMatcher::into_matcher($matcher) ),*
        ])
    };
}

/// Create an [`AnyOf`](crate::matcher::AnyOf) matcher from a list of matchers
/// and plain values. Plain values are promoted to
/// [`equals`](crate::matcher::equals) matchers.
///
/// ```
/// use ogle::any_of;
/// use ogle::matcher::{has_substr, Matcher};
///
/// let m = any_of![17, has_substr("taco")];
/// assert!(m.check(&17.0).is_match());
/// assert!(m.check("burrito").verdict == ogle::Verdict::Undefined);
/// ```
#[macro_export]
macro_rules! any_of {
    ($( $matcher:expr ),* $(,)?) => {
        $crate::matcher::any_of(vec![
            $( $crate::matcher::IntoMatcher::into_matcher($matcher) ),*
        ])
    };
}

/// Create an [`ElementsAre`](crate::matcher::ElementsAre) matcher from a list
/// of matchers and plain values, one per expected element.
///
/// ```
/// use ogle::elements_are;
/// use ogle::matcher::{greater_than, Matcher};
///
/// let m = elements_are![1, greater_than(1)];
/// assert!(m.check(&vec![1, 2]).is_match());
/// ```
#[macro_export]
macro_rules! elements_are {
    ($( $matcher:expr ),* $(,)?) => {
        $crate::matcher::elements_are(vec![
            $( $crate::matcher::IntoMatcher::into_matcher($matcher) ),*
        ])
    };
}

/// Check that a candidate matches the passed matcher or plain value.
///
/// On mismatch a failure is recorded in the current
/// [`TestContext`](crate::context::TestContext) and the test continues. An
/// optional format string and arguments are attached to the failure as user
/// message. Evaluates to `true` if the candidate matched.
///
/// # Panics
/// Panics if the candidate does not match and no
/// [`TestContext`](crate::context::TestContext) is installed.
#[macro_export]
macro_rules! expect_that {
    ($candidate:expr, $matcher:expr $(,)?) => {
        $crate::context::expect_that(
            &$candidate,
            &$crate::matcher::IntoMatcher::into_matcher($matcher),
            file!(),
            line!(),
            None,
        )
    };
    ($candidate:expr, $matcher:expr, $( $arg:tt )+) => {
        $crate::context::expect_that(
            &$candidate,
            &$crate::matcher::IntoMatcher::into_matcher($matcher),
            file!(),
            line!(),
            Some(format!($( $arg )+)),
        )
    };
}

/// Like [`expect_that!`](crate::expect_that), but aborts the test by panicking
/// if the candidate does not match.
#[macro_export]
macro_rules! assert_that {
    ($candidate:expr, $matcher:expr $(,)?) => {
        $crate::context::assert_that(
            &$candidate,
            &$crate::matcher::IntoMatcher::into_matcher($matcher),
            file!(),
            line!(),
            None,
        )
    };
    ($candidate:expr, $matcher:expr, $( $arg:tt )+) => {
        $crate::context::assert_that(
            &$candidate,
            &$crate::matcher::IntoMatcher::into_matcher($matcher),
            file!(),
            line!(),
            Some(format!($( $arg )+)),
        )
    };
}
