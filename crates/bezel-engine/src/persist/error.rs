use std::fmt;

use bezel_doc::ParseError;

/// A style document that could not be turned into style values.
#[derive(Debug, Clone, PartialEq)]
pub enum DocError {
    /// The text is not a well-formed document.
    Parse(ParseError),
    /// The root node names a different style object.
    UnexpectedRoot { expected: &'static str, found: String },
    /// A value of the right kind that names nothing valid, e.g. `TopLeft: Rounded`.
    InvalidValue { field: String, value: String },
    /// A value of the wrong kind, e.g. a number where a color is expected.
    WrongType { field: String, expected: &'static str },
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocError::Parse(e) => write!(f, "{e}"),
            DocError::UnexpectedRoot { expected, found } => {
                write!(f, "expected a `{expected}` document, found `{found}`")
            }
            DocError::InvalidValue { field, value } => write!(f, "invalid value {value:?} for `{field}`"),
            DocError::WrongType { field, expected } => write!(f, "`{field}` must be {expected}"),
        }
    }
}

impl std::error::Error for DocError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for DocError {
    fn from(e: ParseError) -> Self {
        DocError::Parse(e)
    }
}
