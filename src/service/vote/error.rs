use snafu::{Location, Snafu};

use crate::database::DatabaseError;
use crate::model::{ParseIdError, VoteId};

pub type Result<T, E = VoteError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum VoteError {
    /// A caller-supplied identifier did not decode. Detected before any
    /// storage call, never conflated with a missing record.
    #[snafu(display("invalid {field} identifier: {source}"))]
    InvalidIdentifier {
        field: &'static str,
        source: ParseIdError,
    },

    /// The operation targeted an id with zero matching documents. For
    /// updates and deletes this is derived from the store's counts; a no-op
    /// must not read as success.
    #[snafu(display("no vote found for id `{id}`"))]
    NotFound { id: VoteId },

    /// Failure surfaced by the storage gateway, propagated unmodified in
    /// kind. There is no retry and no fallback path.
    #[snafu(display("storage operation failed at {location}: {source}"))]
    Storage {
        source: DatabaseError,
        #[snafu(implicit)]
        location: Location,
    },
}
