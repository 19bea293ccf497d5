//! This module implements `GregorianError`, the error type of the crate.

use alloc::borrow::Cow;
use core::fmt;

/// `ErrorKind` classifies a [`GregorianError`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A wrong operand kind for an operation.
    ///
    /// Rust's type system rejects these at compile time for the safe API;
    /// the variant is retained so the error taxonomy stays closed and
    /// stable for bindings that dispatch on kinds at runtime.
    Type,
    /// A value outside the supported year or tick range.
    #[default]
    Range,
    /// A value that fails a domain constraint, such as an invalid
    /// day-of-month or a negative sleep duration.
    Validation,
    /// Text input that does not match a canonical pattern.
    Syntax,
    /// An internal invariant failure.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => "TypeError",
            Self::Range => "RangeError",
            Self::Validation => "ValidationError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type of `gregorian_rs`.
///
/// Errors are fail-fast and non-retryable; no operation returns a
/// partial result alongside one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GregorianError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl GregorianError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a type error.
    #[inline]
    #[must_use]
    pub const fn r#type() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Creates a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates a validation error.
    #[inline]
    #[must_use]
    pub const fn validation() -> Self {
        Self::new(ErrorKind::Validation)
    }

    /// Creates a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an internal assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches a message to this error.
    #[must_use]
    pub fn with_message(mut self, msg: impl Into<Cow<'static, str>>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for GregorianError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for GregorianError {}
