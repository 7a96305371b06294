use std::collections::HashMap;

use log::{debug, warn};

use itrack_boundary::{ActivityCreate, ActivityPatch};
use itrack_entities::{
    activity::{Activity, ISSUE_ACTION_PREFIX},
    id::{ActivityId, IssueId, PrincipalId},
};

use crate::{ActivityService, Result};

/// Client-side cache of activity lists, keyed by user and by issue.
///
/// Each map entry always holds the complete result of the most recent fetch
/// for that key. Entries are only ever replaced wholesale; there is no
/// merging, expiry, or eviction. A failed operation leaves the cache
/// untouched (stale, not corrupted).
///
/// The store is meant to live on the single logical thread of the UI
/// runtime and is constructed and owned explicitly by the embedding
/// application.
#[derive(Debug)]
pub struct ActivityStore<S> {
    service: S,
    by_user: HashMap<PrincipalId, Vec<Activity>>,
    by_issue: HashMap<IssueId, Vec<Activity>>,
}

impl<S> ActivityStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            by_user: HashMap::new(),
            by_issue: HashMap::new(),
        }
    }

    /// Cached activities attributed to the given user, in response order.
    /// Empty if nothing has been fetched for that user yet.
    #[must_use]
    pub fn activity_list_by_user(&self, user_id: PrincipalId) -> &[Activity] {
        self.by_user.get(&user_id).map_or(&[], Vec::as_slice)
    }

    /// Cached activities of the given issue, in response order.
    /// Empty if nothing has been fetched for that issue yet.
    #[must_use]
    pub fn activity_list_by_issue(&self, issue_id: IssueId) -> &[Activity] {
        self.by_issue.get(&issue_id).map_or(&[], Vec::as_slice)
    }
}

impl<S: ActivityService> ActivityStore<S> {
    /// Fetches all activities and replaces the cache entry of the given
    /// user with the result.
    pub async fn fetch_activity_list_for_user(
        &mut self,
        user_id: PrincipalId,
    ) -> Result<&[Activity]> {
        let activity_list = self.service.activity_list().await?;
        debug!(
            "replacing cached activity list of user {user_id} ({} entries)",
            activity_list.len()
        );
        self.by_user.insert(user_id, activity_list);
        Ok(self.activity_list_by_user(user_id))
    }

    /// Fetches the activities of the given issue and replaces its cache
    /// entry with the result.
    pub async fn fetch_activity_list_for_issue(
        &mut self,
        issue_id: IssueId,
    ) -> Result<&[Activity]> {
        let activity_list = self.service.activity_list_for_issue(issue_id).await?;
        debug!(
            "replacing cached activity list of issue {issue_id} ({} entries)",
            activity_list.len()
        );
        self.by_issue.insert(issue_id, activity_list);
        Ok(self.activity_list_by_issue(issue_id))
    }

    /// Creates an activity. For actions in the issue namespace the issue's
    /// cached list is refreshed afterwards; other activities may have
    /// appeared server-side since the last fetch, so no local insert is
    /// attempted. The created activity is returned either way.
    pub async fn create_activity(&mut self, new_activity: ActivityCreate) -> Result<Activity> {
        let issue_action = new_activity.action_type.starts_with(ISSUE_ACTION_PREFIX);
        let container_id = IssueId::from(new_activity.container_id);
        let created = self.service.create_activity(new_activity).await?;
        if issue_action {
            self.refresh_issue(container_id).await;
        }
        Ok(created)
    }

    /// Updates the comment of an activity, then refreshes the cached list
    /// of its container issue.
    pub async fn update_comment(
        &mut self,
        activity_id: ActivityId,
        updated_comment: String,
    ) -> Result<Activity> {
        let patch = ActivityPatch {
            comment: updated_comment,
        };
        let updated = self.service.patch_activity(activity_id, patch).await?;
        self.refresh_issue(updated.container_id).await;
        Ok(updated)
    }

    /// Deletes an activity. For actions in the issue namespace the issue's
    /// cached list is refreshed afterwards.
    pub async fn delete_activity(&mut self, activity: &Activity) -> Result<()> {
        self.service.delete_activity(activity.id).await?;
        if activity.action_type.is_issue_action() {
            self.refresh_issue(activity.container_id).await;
        }
        Ok(())
    }

    /// Best-effort refresh after a mutation. A failure leaves the cache
    /// stale and is not reported to the caller.
    async fn refresh_issue(&mut self, issue_id: IssueId) {
        if let Err(err) = self.fetch_activity_list_for_issue(issue_id).await {
            warn!("failed to refresh activity list of issue {issue_id}: {err}");
        }
    }
}
