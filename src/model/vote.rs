use derive_new::new;
use serde::{Deserialize, Serialize};

use super::{UserId, VideoId, VoteId};

/// A signed association between a user and a video.
///
/// Immutable once created except for `upvote`, which is the only field an
/// update may change. Two records may reference the same video/user pair;
/// no uniqueness is enforced across them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Vote {
    pub id: VoteId,
    pub video: VideoId,
    pub user: UserId,
    /// `true` is an upvote, `false` a downvote.
    pub upvote: bool,
}
