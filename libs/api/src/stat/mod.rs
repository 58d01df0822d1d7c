use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use entity::prelude::*;
use repository::{Filter, Repository};
use serde_json::Value;
use tracing::info;

use crate::{
    response::{
        ApiResponse, CreatedResp, IntoApiResponse,
    },
    ApiError,
};

const LIST_LIMIT: i64 = 50;

/// Create a stat
#[utoipa::path(
    post,
    path = "/stats",
    request_body = Stat,
    responses(
        (status = 200, description = "Stat created", body = CreatedResp),
        (status = 422, description = "Stat failed validation", body = ValidationErrorResp)
    )
)]
pub async fn create_stat(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> ApiResponse<Json<CreatedResp>> {
    let stat = Stat::from_value(&body)?;

    let inserted_id = repo
        .stat
        .save(&stat)
        .await
        .into_response("failed to save stat")?;

    info!(task = "create stat", inserted_id = inserted_id.as_str());

    Ok(Json(CreatedResp { inserted_id }))
}

/// List headline stats
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "List stats successfully", body = [Stat])
    )
)]
pub async fn get_stats(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<Stat>>> {
    let stats = repo
        .stat
        .find(Filter::new(), LIST_LIMIT)
        .await
        .into_response("failed to list stats")?;

    Ok(Json(stats))
}
