// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::{CreateCommentCommand, UpdateCommentCommand},
    dto::CommentDto,
    queries::comments::{ListCommentsQuery, SortOrder},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub entity_type: String,
    pub entity_id: String,
    pub author_id: String,
    pub text: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCommentRequest {
    pub comment_id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub new_text: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCommentsParams {
    pub entity_type: String,
    pub entity_id: String,
    /// 1-based page number, defaults to 1.
    pub page: Option<u32>,
    /// Page size, defaults to 10.
    pub limit: Option<u32>,
    /// `asc` or `desc` by creation time, defaults to `desc`.
    pub sort: Option<String>,
}

#[utoipa::path(
    post,
    path = "/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid input", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        entity_type: payload.entity_type,
        entity_id: payload.entity_id,
        author_id: payload.author_id,
        text: payload.text,
    };

    state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/comments",
    params(ListCommentsParams),
    responses(
        (status = 200, description = "One page of comments for the entity", body = [CommentDto]),
        (status = 400, description = "Invalid paging or sort", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Entity has no comments", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ListCommentsParams>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    let sort = match params.sort.as_deref() {
        Some(raw) => raw.parse::<SortOrder>().map_err(HttpError::from_error)?,
        None => SortOrder::default(),
    };

    let query = ListCommentsQuery {
        entity_type: params.entity_type,
        entity_id: params.entity_id,
        page: params.page.unwrap_or(DEFAULT_PAGE),
        limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        sort,
    };

    state
        .services
        .comment_queries
        .list_comments(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/comments",
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid input", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn update_comment(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UpdateCommentRequest>,
) -> HttpResult<Json<CommentDto>> {
    let command = UpdateCommentCommand {
        comment_id: payload.comment_id,
        entity_type: payload.entity_type,
        entity_id: payload.entity_id,
        new_text: payload.new_text,
    };

    state
        .services
        .comment_commands
        .update_comment(command)
        .await
        .into_http()
        .map(Json)
}
