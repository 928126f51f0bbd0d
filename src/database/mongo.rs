use async_trait::async_trait;
use futures::TryStreamExt as _;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use snafu::ResultExt as _;
use url::Url;

use crate::model::{UserId, VideoId, Vote, VoteId};

use super::{
    ConnectionSnafu, Namespace, QuerySnafu, Result, ScanSnafu, UpdateOutcome, VoteCollection,
    VoteDocument, VoteFilter,
};

/// Name of the one collection this service owns.
pub const VOTE_COLLECTION: &str = "vote";

/// Connected handle to the document store. Long-lived and externally
/// managed; the core never closes it per call.
#[derive(Debug, Clone)]
pub struct Database {
    client: Client,
}

impl Database {
    /// Connects and pings, so a bad connection string fails at startup
    /// rather than on the first operation.
    pub async fn connect(uri: &Url) -> Result<Self> {
        let client = Client::with_uri_str(uri.as_str())
            .await
            .context(ConnectionSnafu)?;

        client
            .database(Namespace::Primary.database_name())
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context(ConnectionSnafu)?;

        Ok(Self { client })
    }

    /// Binds the vote collection inside one namespace. The binding is
    /// immutable; build another handle for another namespace.
    pub fn votes(&self, namespace: Namespace) -> MongoVotes {
        let collection = self
            .client
            .database(namespace.database_name())
            .collection(VOTE_COLLECTION);

        MongoVotes { collection }
    }
}

/// The MongoDB-backed vote collection.
#[derive(Debug, Clone)]
pub struct MongoVotes {
    collection: Collection<VoteDocument>,
}

#[async_trait]
impl VoteCollection for MongoVotes {
    async fn insert_one(&self, video: VideoId, user: UserId, upvote: bool) -> Result<VoteId> {
        let document = VoteDocument::assign(video, user, upvote);

        self.collection
            .insert_one(&document, None)
            .await
            .context(QuerySnafu)?;

        Ok(document.vote_id())
    }

    async fn find_one(&self, id: VoteId) -> Result<Option<Vote>> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.object_id() }, None)
            .await
            .context(QuerySnafu)?;

        Ok(found.map(Vote::from))
    }

    async fn find_many(&self, filter: VoteFilter) -> Result<Vec<Vote>> {
        let filter = match filter {
            VoteFilter::Video(id) => doc! { "video": id.object_id() },
            VoteFilter::User(id) => doc! { "user": id.object_id() },
        };

        let mut cursor = self
            .collection
            .find(filter, None)
            .await
            .context(QuerySnafu)?;

        let mut votes = Vec::new();
        while let Some(document) = cursor.try_next().await.context(ScanSnafu)? {
            votes.push(Vote::from(document));
        }

        Ok(votes)
    }

    async fn update_upvote(&self, id: VoteId, new_value: bool) -> Result<UpdateOutcome> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id.object_id() },
                doc! { "$set": { "upvote": new_value } },
                None,
            )
            .await
            .context(QuerySnafu)?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete_one(&self, id: VoteId) -> Result<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() }, None)
            .await
            .context(QuerySnafu)?;

        Ok(result.deleted_count)
    }
}
