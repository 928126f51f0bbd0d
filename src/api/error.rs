use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::service::vote::VoteError;

/// Wire form of a failed call.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// Transport wrapper that maps the service's error taxonomy onto HTTP
/// statuses. The kinds stay distinct on the wire: a malformed identifier is
/// the caller's fault, a missing record is not a storage failure.
#[derive(Debug)]
pub struct ApiError(pub VoteError);

impl From<VoteError> for ApiError {
    fn from(error: VoteError) -> Self {
        Self(error)
    }
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            VoteError::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            VoteError::NotFound { .. } => StatusCode::NOT_FOUND,
            VoteError::Storage { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
            code: status.as_u16(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use snafu::IntoError as _;

    use crate::database::QuerySnafu;
    use crate::model::VoteId;
    use crate::service::vote::{InvalidIdentifierSnafu, NotFoundSnafu, StorageSnafu};

    #[test]
    fn statuses_keep_the_error_kinds_distinct() {
        let source = "nope".parse::<VoteId>().unwrap_err();
        let invalid = ApiError(InvalidIdentifierSnafu { field: "vote" }.into_error(source));
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

        let id: VoteId = "61c4014dd6f4074658db9772".parse().unwrap();
        let missing = ApiError(NotFoundSnafu { id }.build());
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let database = QuerySnafu.into_error(mongodb::error::Error::custom("down"));
        let storage = ApiError(StorageSnafu.into_error(database));
        assert_eq!(storage.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
