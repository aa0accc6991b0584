use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Raw identifier value reserved for "the issue could not be resolved".
pub const UNKNOWN_ID: i64 = -1;

/// Raw identifier value reserved for "no issue".
pub const EMPTY_ID: i64 = 0;

/// Numeric issue identifier resolved from a resource name.
///
/// Two values are reserved: [`IssueId::UNKNOWN`] and [`IssueId::EMPTY`].
/// Neither may be embedded in a navigation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(i64);

impl IssueId {
    /// Sentinel for an identifier that could not be resolved.
    pub const UNKNOWN: Self = Self(UNKNOWN_ID);

    /// Sentinel for an absent identifier.
    pub const EMPTY: Self = Self(EMPTY_ID);

    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns whether this value is one of the reserved sentinels.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.0 == UNKNOWN_ID || self.0 == EMPTY_ID
    }
}

impl From<i64> for IssueId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for IssueId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
