use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use entity::prelude::*;
use repository::Repository;
use serde_json::Value;
use tracing::info;

pub mod request;

use crate::{
    response::{
        ApiResponse, CreatedResp, IntoApiResponse,
    },
    ApiError,
};

use self::request::GetPostsParam;

const LIST_LIMIT: i64 = 100;

/// Create a post
///
/// A published post without `published_at` is stamped with the current UTC time.
#[utoipa::path(
    post,
    path = "/posts",
    request_body = Post,
    responses(
        (status = 200, description = "Post created", body = CreatedResp),
        (status = 422, description = "Post failed validation", body = ValidationErrorResp)
    )
)]
pub async fn create_post(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> ApiResponse<Json<CreatedResp>> {
    let post = Post::from_value(&body)?.stamp_published_at(Utc::now());

    let inserted_id = repo
        .post
        .save(&post)
        .await
        .into_response("failed to save post")?;

    info!(task = "create post", inserted_id = inserted_id.as_str());

    Ok(Json(CreatedResp { inserted_id }))
}

/// List posts
#[utoipa::path(
    get,
    path = "/posts",
    responses(
        (status = 200, description = "List posts successfully", body = [Post])
    ),
    params(
        GetPostsParam
    )
)]
pub async fn get_posts(
    State(repo): State<Repository>,
    WithRejection(Query(params), _): WithRejection<
        Query<GetPostsParam>,
        ApiError,
    >,
) -> ApiResponse<Json<Vec<Post>>> {
    let posts = repo
        .post
        .find(params.filter(), LIST_LIMIT)
        .await
        .into_response("failed to list posts")?;

    Ok(Json(posts))
}
