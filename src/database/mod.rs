use async_trait::async_trait;
use serde::Serialize;

use crate::model::{UserId, VideoId, Vote, VoteId};

pub use document::*;
pub use error::*;
pub use mongo::*;

mod document;
mod error;
mod mongo;

#[cfg(test)]
pub(crate) mod memory;

/// Logical database a service instance targets. `Test` exists so integration
/// tests can run against an isolated namespace without a separate deployment.
///
/// The namespace is bound when a collection handle is created and never
/// changes afterwards; isolation is obtained by constructing another handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Primary,
    Test,
}

impl Namespace {
    pub fn database_name(self) -> &'static str {
        match self {
            Namespace::Primary => "ballot",
            Namespace::Test => "ballot_test",
        }
    }
}

/// Which field a multi-document scan filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteFilter {
    Video(VideoId),
    User(UserId),
}

/// Store-reported counts for an update. `matched == 0` is how a missed
/// update surfaces; the service turns it into a not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

/// Store-reported count for a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub deleted: u64,
}

/// The narrow collection capability the vote service consumes.
///
/// One fixed collection of vote documents inside one namespace. Every method
/// is a single call to the backing store; there is no retry, backoff, or
/// timeout layer here, and a scan that fails midway returns the error rather
/// than a partial result.
#[async_trait]
pub trait VoteCollection: Send + Sync {
    /// Writes one new document. The store assigns the id and returns it.
    async fn insert_one(&self, video: VideoId, user: UserId, upvote: bool) -> Result<VoteId>;

    /// Point lookup by id. `Ok(None)` when no document has that id.
    async fn find_one(&self, id: VoteId) -> Result<Option<Vote>>;

    /// Scans all documents matching the filter, in store-native order,
    /// fully materialized before returning.
    async fn find_many(&self, filter: VoteFilter) -> Result<Vec<Vote>>;

    /// Sets `upvote` on the document with that id. Not an upsert.
    async fn update_upvote(&self, id: VoteId, new_value: bool) -> Result<UpdateOutcome>;

    /// Removes the document with that id, reporting how many were deleted.
    async fn delete_one(&self, id: VoteId) -> Result<u64>;
}
