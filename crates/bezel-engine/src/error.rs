use std::fmt;

/// A textual enum value that names no known variant.
///
/// Returned by the `FromStr` impls of the discrete style enums
/// (`CornerType`, `Sides`, `DashStyle`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    /// Human-readable name of the enum being parsed, e.g. `"corner type"`.
    pub kind: &'static str,
    pub value: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}

impl fmt::Display for UnknownName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} {:?}", self.kind, self.value)
    }
}

impl std::error::Error for UnknownName {}
