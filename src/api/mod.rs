use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::instrument;

use crate::database::{DeleteOutcome, UpdateOutcome, VoteCollection};
use crate::model::{Vote, VoteId};
use crate::service::vote::VoteService;

pub use error::*;

mod error;

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// One route per RPC method. All identifier fields travel as hex strings.
pub fn create_router<S>(service: VoteService<S>) -> Router
where
    S: VoteCollection + Clone + 'static,
{
    Router::new()
        .route("/votes", post(insert::<S>))
        .route(
            "/votes/:id",
            get(get_vote::<S>)
                .patch(update_one::<S>)
                .delete(delete_one::<S>),
        )
        .route("/videos/:id/votes", get(list_votes_in_video::<S>))
        .route("/users/:id/votes", get(list_votes_of_user::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct InsertRequest {
    pub video: String,
    pub user: String,
    pub upvote: bool,
}

#[derive(Debug, Serialize)]
pub struct InsertResponse {
    pub id: VoteId,
}

#[derive(Debug, Serialize)]
pub struct GetResponse {
    pub vote: Vote,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOneRequest {
    pub new_value: bool,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub votes: Vec<Vote>,
}

#[instrument(skip(service))]
async fn insert<S: VoteCollection + Clone>(
    State(service): State<VoteService<S>>,
    Json(request): Json<InsertRequest>,
) -> Result<Json<InsertResponse>> {
    let id = service
        .insert(&request.video, &request.user, request.upvote)
        .await?;

    Ok(Json(InsertResponse { id }))
}

#[instrument(skip(service))]
async fn get_vote<S: VoteCollection + Clone>(
    State(service): State<VoteService<S>>,
    Path(id): Path<String>,
) -> Result<Json<GetResponse>> {
    let vote = service.get(&id).await?;

    Ok(Json(GetResponse { vote }))
}

#[instrument(skip(service))]
async fn update_one<S: VoteCollection + Clone>(
    State(service): State<VoteService<S>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateOneRequest>,
) -> Result<Json<UpdateOutcome>> {
    let outcome = service.update_one(&id, request.new_value).await?;

    Ok(Json(outcome))
}

#[instrument(skip(service))]
async fn delete_one<S: VoteCollection + Clone>(
    State(service): State<VoteService<S>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteOutcome>> {
    let outcome = service.delete_one(&id).await?;

    Ok(Json(outcome))
}

#[instrument(skip(service))]
async fn list_votes_in_video<S: VoteCollection + Clone>(
    State(service): State<VoteService<S>>,
    Path(id): Path<String>,
) -> Result<Json<ListResponse>> {
    let votes = service.list_votes_in_video(&id).await?;

    Ok(Json(ListResponse { votes }))
}

#[instrument(skip(service))]
async fn list_votes_of_user<S: VoteCollection + Clone>(
    State(service): State<VoteService<S>>,
    Path(id): Path<String>,
) -> Result<Json<ListResponse>> {
    let votes = service.list_votes_of_user(&id).await?;

    Ok(Json(ListResponse { votes }))
}
