use crate::{
    application::{
        comments::{
            dto::{CommentListResponse, CreateCommentRequest, ListCommentsQuery, UpdateCommentRequest},
            use_case::CommentsUseCase,
        },
        toggle_like::{
            dto::{ToggleLikeRequest, ToggleLikeResponse},
            use_case::ToggleLikeUseCase,
        },
    },
    domain::comment::entity::Comment,
    presentation::http::{errors::AppError, extractors::{AppJson, AppPath, AppQuery}, state::AppState},
};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
};

fn comments(state: &AppState) -> CommentsUseCase {
    CommentsUseCase::new(state.comment_repo.clone())
}

pub async fn list_comments(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ListCommentsQuery>,
) -> Result<Json<CommentListResponse>, AppError> {
    Ok(Json(comments(&state).list(query).await?))
}

pub async fn create_comment(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let comment = comments(&state).create(body).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn get_comment(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Comment>, AppError> {
    Ok(Json(comments(&state).get(id).await?))
}

pub async fn replace_comment(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<UpdateCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    Ok(Json(comments(&state).replace(id, body).await?))
}

pub async fn patch_comment(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<UpdateCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    Ok(Json(comments(&state).patch(id, body).await?))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Result<StatusCode, AppError> {
    comments(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// An empty body is accepted and means `like` from `neutral`.
pub async fn toggle_like(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    body: Bytes,
) -> Result<Json<ToggleLikeResponse>, AppError> {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        ToggleLikeRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let response = ToggleLikeUseCase::new(state.comment_repo.clone())
        .execute(id, request)
        .await?;
    Ok(Json(response))
}
