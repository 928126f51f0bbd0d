//! In-memory stand-in for the document store, mimicking its observable
//! contract (store-assigned ids, matched/modified/deleted counts, namespace
//! separation) closely enough to exercise every service property without a
//! running deployment.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::model::{UserId, VideoId, Vote, VoteId};

use super::{Namespace, Result, UpdateOutcome, VoteCollection, VoteDocument, VoteFilter};

/// Shared backing storage, keyed by namespace like the real deployment.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    collections: Arc<Mutex<HashMap<Namespace, Vec<Vote>>>>,
}

impl MemoryBackend {
    pub fn votes(&self, namespace: Namespace) -> MemoryVotes {
        MemoryVotes {
            backend: self.clone(),
            namespace,
        }
    }

    /// Number of documents currently stored in a namespace.
    pub fn count(&self, namespace: Namespace) -> usize {
        self.collections
            .lock()
            .expect("backend lock poisoned")
            .get(&namespace)
            .map_or(0, Vec::len)
    }
}

/// One namespace's view of the backend.
#[derive(Debug, Clone)]
pub struct MemoryVotes {
    backend: MemoryBackend,
    namespace: Namespace,
}

impl MemoryVotes {
    fn with<T>(&self, operation: impl FnOnce(&mut Vec<Vote>) -> T) -> T {
        let mut collections = self.backend.collections.lock().expect("backend lock poisoned");
        operation(collections.entry(self.namespace).or_default())
    }
}

fn matches(filter: VoteFilter, vote: &Vote) -> bool {
    match filter {
        VoteFilter::Video(id) => vote.video == id,
        VoteFilter::User(id) => vote.user == id,
    }
}

#[async_trait]
impl VoteCollection for MemoryVotes {
    async fn insert_one(&self, video: VideoId, user: UserId, upvote: bool) -> Result<VoteId> {
        let document = VoteDocument::assign(video, user, upvote);
        let id = document.vote_id();

        self.with(|votes| votes.push(Vote::from(document)));

        Ok(id)
    }

    async fn find_one(&self, id: VoteId) -> Result<Option<Vote>> {
        Ok(self.with(|votes| votes.iter().find(|vote| vote.id == id).cloned()))
    }

    async fn find_many(&self, filter: VoteFilter) -> Result<Vec<Vote>> {
        Ok(self.with(|votes| {
            votes
                .iter()
                .filter(|vote| matches(filter, vote))
                .cloned()
                .collect()
        }))
    }

    async fn update_upvote(&self, id: VoteId, new_value: bool) -> Result<UpdateOutcome> {
        Ok(self.with(|votes| match votes.iter_mut().find(|vote| vote.id == id) {
            Some(vote) => {
                // the store reports modified == 0 when the value is unchanged
                let modified = u64::from(vote.upvote != new_value);
                vote.upvote = new_value;
                UpdateOutcome {
                    matched: 1,
                    modified,
                }
            }
            None => UpdateOutcome {
                matched: 0,
                modified: 0,
            },
        }))
    }

    async fn delete_one(&self, id: VoteId) -> Result<u64> {
        Ok(self.with(|votes| {
            let before = votes.len();
            votes.retain(|vote| vote.id != id);
            (before - votes.len()) as u64
        }))
    }
}
