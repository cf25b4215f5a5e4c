//! The [`verdict`](self) module defines the three-valued result of a match
//! together with the diagnostic that explains it.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Three-valued result of applying a [`Matcher`](crate::Matcher) to a candidate.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Verdict {
    /// The candidate matches.
    True,

    /// The candidate has an acceptable type but does not match.
    False,

    /// The matcher does not accept candidates of this type.
    ///
    /// This is kept apart from [`Verdict::False`] so that combinators like
    /// [`Not`](crate::matcher::Not) propagate type mismatches instead of
    /// silently turning them into a match.
    Undefined,
}

impl Verdict {
    /// Returns the negated verdict. [`Verdict::Undefined`] stays undefined.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Undefined => Self::Undefined,
        }
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::True => write!(f, "TRUE"),
            Self::False => write!(f, "FALSE"),
            Self::Undefined => write!(f, "UNDEFINED"),
        }
    }
}

/// Relative clause explaining a verdict, e.g. `"which is not numeric"`.
///
/// The clause is meant to be appended after the rendered candidate in a
/// failure message. A fatal diagnostic marks a categorical mismatch (usually a
/// wrong type) that combinators pass upward unchanged.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash)]
pub struct Diagnostic {
    clause: String,
    fatal: bool,
}

impl Diagnostic {
    /// Create a new non-fatal diagnostic from the passed `clause`.
    pub fn new<S: Into<String>>(clause: S) -> Self {
        Self {
            clause: clause.into(),
            fatal: false,
        }
    }

    /// Create a new fatal diagnostic from the passed `clause`.
    pub fn fatal<S: Into<String>>(clause: S) -> Self {
        Self {
            clause: clause.into(),
            fatal: true,
        }
    }

    /// Get the relative clause of this diagnostic.
    #[must_use]
    pub fn clause(&self) -> &str {
        &self.clause
    }

    /// Returns `true` if this diagnostic is fatal.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    /// Returns `true` if the clause is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    /// Returns a diagnostic with the same fatality but a different clause.
    #[must_use]
    pub fn with_clause<S: Into<String>>(&self, clause: S) -> Self {
        Self {
            clause: clause.into(),
            fatal: self.fatal,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.clause)
    }
}

/// Verdict and diagnostic returned by [`Matcher::matches`](crate::Matcher::matches).
#[must_use]
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Outcome {
    /// The verdict of the match.
    pub verdict: Verdict,

    /// The diagnostic that explains the verdict. Empty for a match.
    pub diagnostic: Diagnostic,
}

impl Outcome {
    /// Create a new outcome from the passed `verdict` and `diagnostic`.
    pub fn new(verdict: Verdict, diagnostic: Diagnostic) -> Self {
        Self {
            verdict,
            diagnostic,
        }
    }

    /// Outcome of a successful match.
    pub fn matched() -> Self {
        Self::new(Verdict::True, Diagnostic::default())
    }

    /// Outcome of an ordinary mismatch with a non-fatal `clause`.
    pub fn mismatch<S: Into<String>>(clause: S) -> Self {
        Self::new(Verdict::False, Diagnostic::new(clause))
    }

    /// Outcome of a type mismatch: undefined with a fatal `clause`.
    pub fn undefined<S: Into<String>>(clause: S) -> Self {
        Self::new(Verdict::Undefined, Diagnostic::fatal(clause))
    }

    /// Outcome for a plain boolean result without explanation.
    pub fn from_bool(value: bool) -> Self {
        Self::new(value.into(), Diagnostic::default())
    }

    /// Returns `true` if the verdict is [`Verdict::True`].
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.verdict == Verdict::True
    }

    /// Returns `true` if the diagnostic is fatal.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.diagnostic.is_fatal()
    }
}
