use derive_new::new;
use snafu::{ensure, OptionExt as _, ResultExt as _};
use tracing::instrument;

use crate::database::{DeleteOutcome, UpdateOutcome, VoteCollection, VoteFilter};
use crate::model::{ParseIdError, UserId, VideoId, Vote, VoteId};

pub use error::*;

mod error;

/// The vote record service: one method per RPC operation.
///
/// Each method decodes the wire identifiers, issues exactly one storage
/// gateway call, and maps the outcome back to a typed result. The instance
/// holds no call-scoped mutable state and is safe for unbounded concurrent
/// invocation; the namespace it targets is fixed by the collection handle it
/// was constructed over.
#[derive(Debug, Clone, new)]
pub struct VoteService<S> {
    store: S,
}

impl<S: VoteCollection> VoteService<S> {
    /// Creates a new vote, returning the store-assigned id.
    #[instrument(skip(self))]
    pub async fn insert(&self, video: &str, user: &str, upvote: bool) -> Result<VoteId> {
        let video: VideoId = decode("video", video)?;
        let user: UserId = decode("user", user)?;

        self.store
            .insert_one(video, user, upvote)
            .await
            .context(StorageSnafu)
    }

    /// Point lookup of one vote by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Vote> {
        let id: VoteId = decode("vote", id)?;

        self.store
            .find_one(id)
            .await
            .context(StorageSnafu)?
            .context(NotFoundSnafu { id })
    }

    /// Sets `upvote` on an existing vote. Matching nothing is an error, not
    /// a silently successful no-op.
    #[instrument(skip(self))]
    pub async fn update_one(&self, id: &str, new_value: bool) -> Result<UpdateOutcome> {
        let id: VoteId = decode("vote", id)?;

        let outcome = self
            .store
            .update_upvote(id, new_value)
            .await
            .context(StorageSnafu)?;

        ensure!(outcome.matched > 0, NotFoundSnafu { id });
        Ok(outcome)
    }

    /// Removes one vote by id. Deleting nothing is an error as well.
    #[instrument(skip(self))]
    pub async fn delete_one(&self, id: &str) -> Result<DeleteOutcome> {
        let id: VoteId = decode("vote", id)?;

        let deleted = self.store.delete_one(id).await.context(StorageSnafu)?;

        ensure!(deleted > 0, NotFoundSnafu { id });
        Ok(DeleteOutcome { deleted })
    }

    /// All votes cast on a video. An empty list is success.
    #[instrument(skip(self))]
    pub async fn list_votes_in_video(&self, video: &str) -> Result<Vec<Vote>> {
        let video: VideoId = decode("video", video)?;

        self.store
            .find_many(VoteFilter::Video(video))
            .await
            .context(StorageSnafu)
    }

    /// All votes a user has cast.
    #[instrument(skip(self))]
    pub async fn list_votes_of_user(&self, user: &str) -> Result<Vec<Vote>> {
        let user: UserId = decode("user", user)?;

        self.store
            .find_many(VoteFilter::User(user))
            .await
            .context(StorageSnafu)
    }
}

/// Uniform wire-to-storage identifier translation. A string that fails to
/// decode stops the operation here; a partially decoded or zero-valued id is
/// never forwarded to storage.
fn decode<T>(field: &'static str, text: &str) -> Result<T>
where
    T: std::str::FromStr<Err = ParseIdError>,
{
    text.parse().context(InvalidIdentifierSnafu { field })
}
