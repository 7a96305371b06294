use std::fmt;

/// Numeric identifier of an activity record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActivityId(i64);

impl ActivityId {
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for ActivityId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<ActivityId> for i64 {
    fn from(from: ActivityId) -> Self {
        from.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier of the issue an activity is attached to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IssueId(i64);

impl IssueId {
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for IssueId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<IssueId> for i64 {
    fn from(from: IssueId) -> Self {
        from.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier of a user account.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrincipalId(i64);

impl PrincipalId {
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for PrincipalId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<PrincipalId> for i64 {
    fn from(from: PrincipalId) -> Self {
        from.0
    }
}

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}
