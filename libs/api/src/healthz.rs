use axum::{extract::State, Json};
use repository::Repository;
use serde::Serialize;
use utoipa::ToSchema;

use crate::response::{ApiResponse, IntoApiResponse};

const SERVICE: &str = "unshakeable-discipline";

#[derive(Serialize, ToSchema)]
pub struct StatusResp {
    pub status: String,
    pub service: String,
}

#[derive(Serialize, ToSchema)]
pub struct TestResp {
    pub ok: bool,
}

/// Liveness; never touches the store
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = StatusResp)
    )
)]
pub async fn get_root() -> Json<StatusResp> {
    Json(StatusResp {
        status: "ok".to_string(),
        service: SERVICE.to_string(),
    })
}

/// Readiness; one round trip to the document store
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Document store reachable", body = TestResp),
        (status = 500, description = "Document store unreachable", body = ErrorResp)
    )
)]
pub async fn get_test(
    State(repo): State<Repository>,
) -> ApiResponse<Json<TestResp>> {
    repo.ping()
        .await
        .into_response("failed to list collections")?;

    Ok(Json(TestResp { ok: true }))
}
