use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
#[cfg(feature = "entity-conversions")]
pub use self::conv::ConversionError;

/// A resource object as delivered by the API: a string `id`, a `type` tag
/// and the type-specific attributes.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ResourceObject<A> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: A,
}

/// Companion resource delivered in the `included` list of a document.
/// Its attributes stay untyped until a consumer needs them.
pub type IncludedResource = ResourceObject<serde_json::Value>;

/// Response envelope of list endpoints:
/// `{ "data": [...], "included": [...] }`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CollectionDocument<A> {
    pub data: Vec<ResourceObject<A>>,
    #[serde(default = "Vec::new")]
    pub included: Vec<IncludedResource>,
}

/// Response envelope of single-resource endpoints.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct SingleDocument<A> {
    pub data: ResourceObject<A>,
    #[serde(default = "Vec::new")]
    pub included: Vec<IncludedResource>,
}

/// Request envelope of mutation endpoints:
/// `{ "data": { "type": ..., "attributes": ... } }`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RequestDocument<A> {
    pub data: RequestObject<A>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RequestObject<A> {
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: A,
}

impl<A> RequestDocument<A> {
    pub fn new(kind: impl Into<String>, attributes: A) -> Self {
        Self {
            data: RequestObject {
                kind: kind.into(),
                attributes,
            },
        }
    }
}

/// Wire attributes of an activity resource.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ActivityAttrs {
    pub creator_id: i64,
    pub created_ts: i64,
    pub updated_ts: i64,
    pub action_type: String,
    pub container_id: i64,
    pub comment: String,
    /// JSON-encoded string, decoded during entity conversion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

/// Attributes of an activity creation request (`type: "activityCreate"`).
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ActivityCreate {
    pub action_type: String,
    pub container_id: i64,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

impl ActivityCreate {
    #[must_use]
    pub fn into_request(self) -> RequestDocument<Self> {
        RequestDocument::new("activityCreate", self)
    }
}

/// Attributes of a comment update request (`type: "activityPatch"`).
/// Only the comment can be patched.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ActivityPatch {
    pub comment: String,
}

impl ActivityPatch {
    #[must_use]
    pub fn into_request(self) -> RequestDocument<Self> {
        RequestDocument::new("activityPatch", self)
    }
}

/// Error body returned by the API on non-2xx responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub http_status: u16,
    pub message: String,
}
