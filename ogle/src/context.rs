//! The [`context`](self) module implements the failure sink that receives the
//! failures reported by [`expect_that!`](crate::expect_that) and
//! [`assert_that!`](crate::assert_that), and the thread local
//! [`TestContext`] that installs it.

use std::cell::RefCell;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Matcher, Reflect};

/// A single failed expectation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FailureRecord {
    /// Source file of the failed expectation.
    pub file: &'static str,

    /// Source line of the failed expectation.
    pub line: u32,

    /// Message generated from the matcher description and the candidate.
    pub generated: String,

    /// Optional message supplied by the user.
    pub user: Option<String>,
}

impl Display for FailureRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}:{}:\n{}", self.file, self.line, self.generated)?;
        if let Some(user) = &self.user {
            write!(f, "\n{user}")?;
        }

        Ok(())
    }
}

/// Receiver of failed expectations.
pub trait FailureSink: Send + Sync {
    /// Record the passed failure.
    fn record_failure(&self, record: FailureRecord);
}

/// Per test state that collects the failures of a test.
#[derive(Debug)]
pub struct TestState {
    suite: String,
    name: String,
    failures: Mutex<Vec<FailureRecord>>,
}

impl TestState {
    /// Create a new [`TestState`] for the test `name` of the passed `suite`.
    pub fn new<S: Into<String>, N: Into<String>>(suite: S, name: N) -> Self {
        Self {
            suite: suite.into(),
            name: name.into(),
            failures: Mutex::new(Vec::new()),
        }
    }

    /// Name of the test suite.
    #[must_use]
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Name of the test.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the failures recorded so far.
    #[must_use]
    pub fn failures(&self) -> Vec<FailureRecord> {
        self.failures.lock().clone()
    }

    /// Returns `true` if at least one failure was recorded.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        !self.failures.lock().is_empty()
    }

    fn report(&self) -> String {
        let mut ret = format!("{}.{} failed:", self.suite, self.name);
        for record in self.failures.lock().iter() {
            ret.push_str("\n\n");
            ret.push_str(&record.to_string());
        }

        ret
    }
}

impl FailureSink for TestState {
    fn record_failure(&self, record: FailureRecord) {
        tracing::debug!(
            suite = %self.suite,
            test = %self.name,
            file = record.file,
            line = record.line,
            "record failure"
        );

        self.failures.lock().push(record);
    }
}

/// Installs a [`FailureSink`] for the current thread.
///
/// Contexts may be nested: the most recently created context receives the
/// failures until it is dropped. A context created with [`TestContext::new`]
/// fails the test on drop if any failure was recorded.
#[must_use]
#[derive(Debug)]
pub struct TestContext {
    state: Option<Arc<TestState>>,
    _marker: PhantomData<*const ()>,
}

/// Thread local chain of installed sinks.
struct Inner {
    parent: Option<Box<Inner>>,
    sink: Arc<dyn FailureSink>,
}

impl TestContext {
    /// Create a new [`TestContext`] that collects the failures of the test
    /// `name` of the passed `suite`.
    pub fn new<S: Into<String>, N: Into<String>>(suite: S, name: N) -> Self {
        let state = Arc::new(TestState::new(suite, name));
        tracing::trace!(suite = %state.suite, test = %state.name, "enter test context");

        install(state.clone());

        Self {
            state: Some(state),
            _marker: PhantomData,
        }
    }

    /// Create a new [`TestContext`] that forwards the failures to the passed
    /// `sink`.
    pub fn with_sink(sink: Arc<dyn FailureSink>) -> Self {
        tracing::trace!("enter test context");

        install(sink);

        Self {
            state: None,
            _marker: PhantomData,
        }
    }

    /// Returns the state of this context, if it was created by
    /// [`TestContext::new`].
    #[must_use]
    pub fn state(&self) -> Option<&Arc<TestState>> {
        self.state.as_ref()
    }

    /// Returns the sink of the innermost context of the current thread.
    #[must_use]
    pub fn current() -> Option<Arc<dyn FailureSink>> {
        CURRENT_CONTEXT.with(|cell| cell.borrow().as_ref().map(|inner| inner.sink.clone()))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|cell| {
            let mut cell = cell.borrow_mut();
            *cell = cell.take().and_then(|inner| inner.parent.map(|x| *x));
        });

        tracing::trace!("leave test context");

        if let Some(state) = &self.state {
            if state.has_failed() && !std::thread::panicking() {
                panic!("{}", state.report());
            }
        }
    }
}

fn install(sink: Arc<dyn FailureSink>) {
    CURRENT_CONTEXT.with(|cell| {
        let mut cell = cell.borrow_mut();
        let parent = cell.take().map(Box::new);

        *cell = Some(Inner { parent, sink });
    });
}

thread_local! {
    static CURRENT_CONTEXT: RefCell<Option<Inner>> = const { RefCell::new(None) };
}

/// Build the generated failure message for `matcher` and `candidate`.
///
/// Returns `None` if the candidate matches.
pub fn failure_message<C, M>(candidate: &C, matcher: &M) -> Option<String>
where
    C: Reflect + ?Sized,
    M: Matcher + ?Sized,
{
    let candidate = candidate.reflect();
    let outcome = matcher.matches(&candidate);
    if outcome.is_match() {
        return None;
    }

    let mut message = format!("Expected: {}\nActual:   {candidate}", matcher.describe());
    if !outcome.diagnostic.is_empty() {
        message.push_str(", ");
        message.push_str(outcome.diagnostic.clause());
    }

    Some(message)
}

fn check<C, M>(
    candidate: &C,
    matcher: &M,
    file: &'static str,
    line: u32,
    user: Option<String>,
) -> Option<FailureRecord>
where
    C: Reflect + ?Sized,
    M: Matcher + ?Sized,
{
    failure_message(candidate, matcher).map(|generated| FailureRecord {
        file,
        line,
        generated,
        user,
    })
}

/// Apply `matcher` to `candidate` and record a failure in the current
/// [`TestContext`] if it does not match.
///
/// This is the function behind [`expect_that!`](crate::expect_that). Returns
/// `true` if the candidate matched.
///
/// # Panics
/// Panics with the failure message if the candidate does not match and no
/// [`TestContext`] is installed for the current thread.
pub fn expect_that<C, M>(
    candidate: &C,
    matcher: &M,
    file: &'static str,
    line: u32,
    user: Option<String>,
) -> bool
where
    C: Reflect + ?Sized,
    M: Matcher + ?Sized,
{
    let Some(record) = check(candidate, matcher, file, line, user) else {
        return true;
    };

    match TestContext::current() {
        Some(sink) => sink.record_failure(record),
        None => panic!("{record}"),
    }

    false
}

/// Apply `matcher` to `candidate`, record a failure in the current
/// [`TestContext`] if it does not match and abort the test.
///
/// This is the function behind [`assert_that!`](crate::assert_that).
///
/// # Panics
/// Panics with the failure message if the candidate does not match.
pub fn assert_that<C, M>(
    candidate: &C,
    matcher: &M,
    file: &'static str,
    line: u32,
    user: Option<String>,
) where
    C: Reflect + ?Sized,
    M: Matcher + ?Sized,
{
    let Some(record) = check(candidate, matcher, file, line, user) else {
        return;
    };

    if let Some(sink) = TestContext::current() {
        sink.record_failure(record.clone());
    }

    panic!("{record}");
}
