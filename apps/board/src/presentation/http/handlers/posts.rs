use crate::application::{
    post_actions::dto::{ActionResponse, EditPostRequest, PostSnapshotRequest, RenderCardRequest},
    post_card::dto::PostCard,
};
use crate::domain::post::{entity::Post, gate::PostAction};
use crate::presentation::http::{
    errors::AppError, middleware::viewer::decode_viewer, state::AppState,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::HeaderMap,
};
use validator::Validate;

fn ensure_same_post(path_id: &str, post: &Post) -> Result<(), AppError> {
    if post.id.as_str() == path_id {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Post id in path does not match snapshot".to_string(),
        ))
    }
}

async fn submit(
    state: &AppState,
    headers: &HeaderMap,
    path_id: &str,
    post: &Post,
    action: PostAction,
) -> Result<Json<ActionResponse>, AppError> {
    ensure_same_post(path_id, post)?;
    let viewer = decode_viewer(headers, &state.config.jwt_secret);
    let receipt = state
        .post_actions
        .submit(post, viewer.as_ref(), action)
        .await?;
    Ok(Json(ActionResponse::from(receipt)))
}

pub async fn render_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RenderCardRequest>, JsonRejection>,
) -> Result<Json<PostCard>, AppError> {
    let Json(body) = payload?;
    let viewer = decode_viewer(&headers, &state.config.jwt_secret);
    let strings = body.strings.unwrap_or_default();
    Ok(Json(state.post_cards.render(
        &body.post,
        viewer.as_ref(),
        &strings,
    )))
}

pub async fn edit_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<EditPostRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, AppError> {
    let Json(body) = payload?;
    body.validate()?;
    let action = PostAction::Edit {
        content: body.content,
    };
    submit(&state, &headers, &id, &body.post, action).await
}

pub async fn like_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<PostSnapshotRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, AppError> {
    let Json(body) = payload?;
    submit(&state, &headers, &id, &body.post, PostAction::Like).await
}

pub async fn unlike_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<PostSnapshotRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, AppError> {
    let Json(body) = payload?;
    submit(&state, &headers, &id, &body.post, PostAction::Unlike).await
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<PostSnapshotRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, AppError> {
    let Json(body) = payload?;
    submit(&state, &headers, &id, &body.post, PostAction::Delete).await
}
