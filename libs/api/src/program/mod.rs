use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
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

use self::request::GetProgramsParam;

const LIST_LIMIT: i64 = 100;

/// Create a program
#[utoipa::path(
    post,
    path = "/programs",
    request_body = Program,
    responses(
        (status = 200, description = "Program created", body = CreatedResp),
        (status = 422, description = "Program failed validation", body = ValidationErrorResp)
    )
)]
pub async fn create_program(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> ApiResponse<Json<CreatedResp>> {
    let program = Program::from_value(&body)?;

    let inserted_id = repo
        .program
        .save(&program)
        .await
        .into_response("failed to save program")?;

    info!(task = "create program", inserted_id = inserted_id.as_str());

    Ok(Json(CreatedResp { inserted_id }))
}

/// List programs
#[utoipa::path(
    get,
    path = "/programs",
    responses(
        (status = 200, description = "List programs successfully", body = [Program])
    ),
    params(
        GetProgramsParam
    )
)]
pub async fn get_programs(
    State(repo): State<Repository>,
    WithRejection(Query(params), _): WithRejection<
        Query<GetProgramsParam>,
        ApiError,
    >,
) -> ApiResponse<Json<Vec<Program>>> {
    let programs = repo
        .program
        .find(params.filter(), LIST_LIMIT)
        .await
        .into_response("failed to list programs")?;

    Ok(Json(programs))
}
