use snafu::{Location, Snafu};

pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DatabaseError {
    #[snafu(display("cannot connect to the document store at {location}: {source}"))]
    Connection {
        source: mongodb::error::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("failed to query the vote collection at {location}: {source}"))]
    Query {
        source: mongodb::error::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("failed to read the vote cursor at {location}: {source}"))]
    Scan {
        source: mongodb::error::Error,
        #[snafu(implicit)]
        location: Location,
    },
}
