//! Error handling for the tokenizer and binder.
//!
//! The tokenizer and binder are total functions over their input: ordinary
//! SQL text, however malformed, never produces an `Err`. The [`Error`] type
//! here exists only for the small set of invariant violations that spec
//! §7 calls programmer error — conditions the five-pass tokenizer and the
//! binder's token walk should never actually reach.

use std::fmt;

/// A byte-offset span in the source statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn point(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Internal invariant violations. Every variant here indicates a bug in the
/// tokenizer or binder itself, not a property of the input statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("unknown token kind {kind} for token {text:?}")]
    UnknownTokenKind { kind: String, text: String },

    #[error("no non-alphanumeric character found while scanning identifier")]
    IdentifierScanGuardTripped,

    #[error("no non-num-period char found while scanning number")]
    NumberScanGuardTripped,

    #[error("internal error: {0}")]
    Internal(String),
}

/// An [`ErrorKind`] located at a [`Span`] in the offending statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub span: Option<Span>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, span: None }
    }

    pub fn with_span(kind: ErrorKind, span: Span) -> Self {
        Self {
            kind,
            span: Some(span),
        }
    }

    pub fn unknown_token_kind(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownTokenKind {
            kind: kind.into(),
            text: text.into(),
        })
    }

    pub fn identifier_scan_guard(pos: usize) -> Self {
        Self::with_span(ErrorKind::IdentifierScanGuardTripped, Span::point(pos))
    }

    pub fn number_scan_guard(pos: usize) -> Self {
        Self::with_span(ErrorKind::NumberScanGuardTripped, Span::point(pos))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(span) = self.span {
            write!(f, " at position {}", span.start)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
