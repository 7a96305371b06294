use std::fmt;

use serde_json::Value;

use crate::{id::*, time::*};

/// Namespace prefix of action types that are attached to an issue.
pub const ISSUE_ACTION_PREFIX: &str = "bb.issue.";

/// Namespaced tag describing the action an activity records,
/// e.g. `bb.issue.create` or `bb.issue.comment.create`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionType(String);

impl ActionType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// `true` for actions in the issue namespace, i.e. those whose
    /// container refers to an issue.
    #[must_use]
    pub fn is_issue_action(&self) -> bool {
        self.0.starts_with(ISSUE_ACTION_PREFIX)
    }
}

impl From<String> for ActionType {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for ActionType {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<ActionType> for String {
    fn from(from: ActionType) -> Self {
        from.0
    }
}

impl AsRef<str> for ActionType {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// A logged action, attached to a container (issue) and attributed to the
/// user that triggered it. Immutable once created, apart from the
/// server-managed comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: ActivityId,
    pub creator_id: PrincipalId,
    pub created_ts: Timestamp,
    pub updated_ts: Timestamp,
    pub action_type: ActionType,
    pub container_id: IssueId,
    pub comment: String,
    /// Structured payload decoded from the wire, absent for most actions.
    pub payload: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_actions_are_namespaced() {
        assert!(ActionType::from("bb.issue.create").is_issue_action());
        assert!(ActionType::from("bb.issue.comment.create").is_issue_action());
        assert!(ActionType::from("bb.issue.status.update").is_issue_action());
        assert!(!ActionType::from("bb.pipeline.task.status.update").is_issue_action());
        assert!(!ActionType::from("bb.member.create").is_issue_action());
        assert!(!ActionType::from("bb.issue").is_issue_action());
    }
}
