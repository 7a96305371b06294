use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use itrack_boundary::{
    ActivityAttrs, ActivityCreate, ActivityPatch, CollectionDocument, SingleDocument,
};
use itrack_entities::{
    activity::Activity,
    id::{ActivityId, IssueId},
};

use crate::{ensure_ok, into_json, Result};

/// The typed capability surface the activity store needs from the backend.
///
/// Production code talks to [`ActivityApi`]; tests substitute their own
/// implementation.
#[async_trait(?Send)]
pub trait ActivityService {
    /// Fetches all activities, unfiltered.
    async fn activity_list(&self) -> Result<Vec<Activity>>;

    /// Fetches the activities attached to the given issue.
    async fn activity_list_for_issue(&self, issue_id: IssueId) -> Result<Vec<Activity>>;

    async fn create_activity(&self, new_activity: ActivityCreate) -> Result<Activity>;

    async fn patch_activity(&self, activity_id: ActivityId, patch: ActivityPatch)
        -> Result<Activity>;

    async fn delete_activity(&self, activity_id: ActivityId) -> Result<()>;
}

/// REST client for the activity endpoints.
///
/// Authentication is ambient: the session cookie is sent along with every
/// request.
#[derive(Debug, Clone)]
pub struct ActivityApi {
    url: String,
}

impl ActivityApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    async fn fetch_list(&self, url: &str) -> Result<Vec<Activity>> {
        let response = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        let document: CollectionDocument<ActivityAttrs> = into_json(response).await?;
        Ok(document.into_activities()?)
    }
}

#[async_trait(?Send)]
impl ActivityService for ActivityApi {
    async fn activity_list(&self) -> Result<Vec<Activity>> {
        let url = format!("{}/activity", self.url);
        self.fetch_list(&url).await
    }

    async fn activity_list_for_issue(&self, issue_id: IssueId) -> Result<Vec<Activity>> {
        let url = format!("{}/activity?container={issue_id}", self.url);
        self.fetch_list(&url).await
    }

    async fn create_activity(&self, new_activity: ActivityCreate) -> Result<Activity> {
        let url = format!("{}/activity", self.url);
        let response = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(&new_activity.into_request())?
            .send()
            .await?;
        let document: SingleDocument<ActivityAttrs> = into_json(response).await?;
        Ok(document.into_activity()?)
    }

    async fn patch_activity(
        &self,
        activity_id: ActivityId,
        patch: ActivityPatch,
    ) -> Result<Activity> {
        let url = format!("{}/activity/{activity_id}", self.url);
        let response = Request::patch(&url)
            .credentials(RequestCredentials::Include)
            .json(&patch.into_request())?
            .send()
            .await?;
        let document: SingleDocument<ActivityAttrs> = into_json(response).await?;
        Ok(document.into_activity()?)
    }

    async fn delete_activity(&self, activity_id: ActivityId) -> Result<()> {
        let url = format!("{}/activity/{activity_id}", self.url);
        let response = Request::delete(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        ensure_ok(response).await
    }
}
