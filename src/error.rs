//! Error types for tagtree

use std::fmt;
use thiserror::Error;

/// Position inside an attribute string
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.offset, self.line, self.col)
    }
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

/// Broad class of an error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A structural field (the tag name) was missing or unusable.
    Validation,
    /// An attribute string did not follow the `name="value"` grammar.
    Format,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Format => write!(f, "format"),
        }
    }
}

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyTag,
    InvalidTag { tag: String },
    ExpectedName,
    ExpectedEquals { name: String },
    ExpectedQuote { name: String },
    UnterminatedValue { name: String },
}

impl ErrorKind {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyTag | Self::InvalidTag { .. } => ErrorCategory::Validation,
            Self::ExpectedName
            | Self::ExpectedEquals { .. }
            | Self::ExpectedQuote { .. }
            | Self::UnterminatedValue { .. } => ErrorCategory::Format,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTag => write!(f, "tag name is empty"),
            Self::InvalidTag { tag } => write!(f, "invalid tag name: {tag:?}"),
            Self::ExpectedName => write!(f, "expected attribute name"),
            Self::ExpectedEquals { name } => write!(f, "expected '=' after attribute {name}"),
            Self::ExpectedQuote { name } => {
                write!(f, "expected '\"' to open value of attribute {name}")
            }
            Self::UnterminatedValue { name } => {
                write!(f, "unterminated value for attribute {name}")
            }
        }
    }
}

/// Main error type for tagtree
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    pos: Option<Pos>,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            pos: None,
            message,
        }
    }

    /// Create error at a specific position of an attribute string
    pub fn at(kind: ErrorKind, pos: Pos) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            pos: Some(pos),
            message,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub const fn pos(&self) -> Option<Pos> {
        self.pos
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self.kind.category(), ErrorCategory::Validation)
    }

    pub const fn is_format(&self) -> bool {
        matches!(self.kind.category(), ErrorCategory::Format)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pos {
            Some(pos) => write!(f, "{} error at {}: {}", self.category(), pos, self.message),
            None => write!(f, "{} error: {}", self.category(), self.message),
        }
    }
}

/// Result type alias for tagtree
pub type Result<T> = std::result::Result<T, Error>;
