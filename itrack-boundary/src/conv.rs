use std::num::ParseIntError;

use itrack_entities as e;
use thiserror::Error;

use super::*;

/// Failure while normalizing a wire resource into a domain entity.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("invalid resource id: {0}")]
    InvalidId(#[from] ParseIntError),
    #[error("invalid activity payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

impl TryFrom<ResourceObject<ActivityAttrs>> for e::activity::Activity {
    type Error = ConversionError;

    fn try_from(from: ResourceObject<ActivityAttrs>) -> Result<Self, Self::Error> {
        let ResourceObject {
            id,
            kind: _kind,
            attributes,
        } = from;
        let ActivityAttrs {
            creator_id,
            created_ts,
            updated_ts,
            action_type,
            container_id,
            comment,
            payload,
        } = attributes;
        let id = id.parse::<i64>()?;
        let payload = payload
            .map(|raw| serde_json::from_str(&raw))
            .transpose()?;
        Ok(Self {
            id: id.into(),
            creator_id: creator_id.into(),
            created_ts: e::time::Timestamp::from_seconds(created_ts),
            updated_ts: e::time::Timestamp::from_seconds(updated_ts),
            action_type: action_type.into(),
            container_id: container_id.into(),
            comment,
            payload,
        })
    }
}

impl CollectionDocument<ActivityAttrs> {
    /// Converts every activity resource of the document. The companion
    /// `included` resources are not consulted: activities reference no
    /// other resources.
    pub fn into_activities(self) -> Result<Vec<e::activity::Activity>, ConversionError> {
        self.data.into_iter().map(TryInto::try_into).collect()
    }
}

impl SingleDocument<ActivityAttrs> {
    pub fn into_activity(self) -> Result<e::activity::Activity, ConversionError> {
        self.data.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::activity::Activity;
    use serde_json::json;

    fn resource(id: &str, payload: Option<&str>) -> ResourceObject<ActivityAttrs> {
        ResourceObject {
            id: id.to_owned(),
            kind: "activity".to_owned(),
            attributes: ActivityAttrs {
                creator_id: 1,
                created_ts: 1_658_000_000,
                updated_ts: 1_658_000_100,
                action_type: "bb.issue.comment.create".to_owned(),
                container_id: 42,
                comment: "hi".to_owned(),
                payload: payload.map(ToOwned::to_owned),
            },
        }
    }

    #[test]
    fn convert_parses_numeric_id() {
        let activity = Activity::try_from(resource("101", None)).unwrap();
        assert_eq!(activity.id, 101.into());
        assert_eq!(activity.creator_id, 1.into());
        assert_eq!(activity.container_id, 42.into());
        assert_eq!(activity.created_ts.into_seconds(), 1_658_000_000);
        assert_eq!(activity.comment, "hi");
    }

    #[test]
    fn convert_fails_on_malformed_id() {
        let err = Activity::try_from(resource("not-a-number", None)).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidId(_)));
    }

    #[test]
    fn convert_without_payload_yields_none() {
        let activity = Activity::try_from(resource("7", None)).unwrap();
        assert_eq!(activity.payload, None);
    }

    #[test]
    fn convert_decodes_payload_string() {
        let raw = r#"{"issueName":"rename column","rollback":false}"#;
        let activity = Activity::try_from(resource("7", Some(raw))).unwrap();
        assert_eq!(
            activity.payload,
            Some(json!({ "issueName": "rename column", "rollback": false }))
        );
    }

    #[test]
    fn convert_fails_on_malformed_payload() {
        let err = Activity::try_from(resource("7", Some("{ not json"))).unwrap_err();
        assert!(matches!(err, ConversionError::InvalidPayload(_)));
    }

    #[test]
    fn convert_collection_preserves_response_order() {
        let document = CollectionDocument {
            data: vec![resource("2", None), resource("1", None)],
            included: vec![],
        };
        let activities = document.into_activities().unwrap();
        let ids: Vec<_> = activities.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2.into(), 1.into()]);
    }
}
