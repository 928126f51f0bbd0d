use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::model::{UserId, VideoId, Vote, VoteId};

/// Persisted shape of a vote row. Field names are fixed; changing them
/// requires a migration plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub video: ObjectId,
    pub user: ObjectId,
    pub upvote: bool,
}

impl VoteDocument {
    /// Builds a fresh document with a store-assigned id.
    pub fn assign(video: VideoId, user: UserId, upvote: bool) -> Self {
        Self {
            id: ObjectId::new(),
            video: video.object_id(),
            user: user.object_id(),
            upvote,
        }
    }

    pub fn vote_id(&self) -> VoteId {
        VoteId::from_object_id(self.id)
    }
}

/// The single decode from a persisted row into the typed record. Both the
/// point lookup and the scans go through here.
impl From<VoteDocument> for Vote {
    fn from(document: VoteDocument) -> Self {
        Vote {
            id: VoteId::from_object_id(document.id),
            video: VideoId::from_object_id(document.video),
            user: UserId::from_object_id(document.user),
            upvote: document.upvote,
        }
    }
}
