//! Deletion service: confirm, send the delete, then follow up on the page.

use piplant_domain::error::DashboardError;
use piplant_domain::id::{DeviceId, ScheduleId, UserId};
use piplant_domain::outcome::DeleteOutcome;
use piplant_domain::resource::ResourceKind;

use crate::ports::{ApiClient, Dialogs, Navigator};

/// The two texts shown around one kind of delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompts {
    pub confirm: String,
    pub failure: String,
}

impl DeletePrompts {
    fn for_kind(kind: ResourceKind) -> Self {
        Self {
            confirm: format!("Are you sure you want to delete this {kind}?"),
            failure: format!("Could not delete {kind}"),
        }
    }
}

/// Dialog texts for every deletable resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMessages {
    pub device: DeletePrompts,
    pub schedule: DeletePrompts,
    pub user: DeletePrompts,
}

impl DeleteMessages {
    fn for_kind(&self, kind: ResourceKind) -> &DeletePrompts {
        match kind {
            ResourceKind::Device => &self.device,
            ResourceKind::Schedule => &self.schedule,
            ResourceKind::User => &self.user,
        }
    }
}

impl Default for DeleteMessages {
    fn default() -> Self {
        Self {
            device: DeletePrompts::for_kind(ResourceKind::Device),
            schedule: DeletePrompts::for_kind(ResourceKind::Schedule),
            user: DeletePrompts::for_kind(ResourceKind::User),
        }
    }
}

/// What a delete action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteResult {
    /// The user declined; no request was sent.
    Cancelled,
    /// Deleted, and the page stays where it is.
    Deleted,
    /// Deleted, and the page moved to the given URL.
    Redirected(String),
    /// Deleted, and the page was reloaded.
    Reloaded,
    /// The delete failed and the user was alerted.
    Failed,
}

/// How the page follows up on a successful delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FollowUp {
    /// Obey the redirect in the response body.
    Outcome,
    /// Ignore the body and reload.
    Reload,
}

/// Application service for the dashboard's delete buttons.
pub struct DeletionService<A, D, N> {
    api: A,
    dialogs: D,
    navigator: N,
    messages: DeleteMessages,
}

impl<A: ApiClient, D: Dialogs, N: Navigator> DeletionService<A, D, N> {
    /// Create a new service with the default dialog texts.
    pub fn new(api: A, dialogs: D, navigator: N) -> Self {
        Self {
            api,
            dialogs,
            navigator,
            messages: DeleteMessages::default(),
        }
    }

    #[must_use]
    pub fn with_messages(mut self, messages: DeleteMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Delete a device, then follow the redirect the backend asks for.
    ///
    /// # Errors
    ///
    /// Returns an error only when a dialog or the navigator fails. Transport
    /// and status failures are alerted and reported as
    /// [`DeleteResult::Failed`]. A body that is not a redirect request leaves
    /// the page where it is.
    #[tracing::instrument(skip(self, id), fields(device_id = %id))]
    pub async fn delete_device(&self, id: &DeviceId) -> Result<DeleteResult, DashboardError> {
        self.delete(ResourceKind::Device, id.as_str(), FollowUp::Outcome)
            .await
    }

    /// Delete a schedule, then reload the page.
    ///
    /// # Errors
    ///
    /// Same as [`Self::delete_device`].
    #[tracing::instrument(skip(self, id), fields(schedule_id = %id))]
    pub async fn delete_schedule(&self, id: &ScheduleId) -> Result<DeleteResult, DashboardError> {
        self.delete(ResourceKind::Schedule, id.as_str(), FollowUp::Reload)
            .await
    }

    /// Delete a user, then follow the redirect the backend asks for.
    ///
    /// # Errors
    ///
    /// Same as [`Self::delete_device`].
    #[tracing::instrument(skip(self, id), fields(user_id = %id))]
    pub async fn delete_user(&self, id: &UserId) -> Result<DeleteResult, DashboardError> {
        self.delete(ResourceKind::User, id.as_str(), FollowUp::Outcome)
            .await
    }

    async fn delete(
        &self,
        kind: ResourceKind,
        id: &str,
        follow_up: FollowUp,
    ) -> Result<DeleteResult, DashboardError> {
        let prompts = self.messages.for_kind(kind);

        if !self.dialogs.confirm(&prompts.confirm).await? {
            tracing::debug!(%kind, "delete cancelled by user");
            return Ok(DeleteResult::Cancelled);
        }

        let outcome = match self.request(kind, id, follow_up).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(%kind, error = %err, "delete failed");
                self.dialogs.alert(&prompts.failure).await?;
                return Ok(DeleteResult::Failed);
            }
        };

        match follow_up {
            FollowUp::Reload => {
                self.navigator.reload()?;
                Ok(DeleteResult::Reloaded)
            }
            FollowUp::Outcome => match outcome.redirect_target() {
                Some(url) => {
                    tracing::info!(%kind, url, "redirecting after delete");
                    self.navigator.navigate(url)?;
                    Ok(DeleteResult::Redirected(url.to_owned()))
                }
                None => Ok(DeleteResult::Deleted),
            },
        }
    }

    /// Send the request and interpret the body when the follow-up needs it.
    async fn request(
        &self,
        kind: ResourceKind,
        id: &str,
        follow_up: FollowUp,
    ) -> Result<DeleteOutcome, DashboardError> {
        let body = self.api.delete(kind, id).await?;
        match follow_up {
            FollowUp::Reload => Ok(DeleteOutcome::default()),
            FollowUp::Outcome => Ok(DeleteOutcome::parse(&body)),
        }
    }
}
