use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use entity::prelude::*;
use repository::Repository;
use serde_json::Value;
use tracing::info;

use crate::{
    response::{
        ApiResponse, CreatedResp, IntoApiResponse,
    },
    ApiError,
};

/// Submit a contact or coaching inquiry
///
/// Inquiries are write-only; there is no list endpoint.
#[utoipa::path(
    post,
    path = "/inquiries",
    request_body = Inquiry,
    responses(
        (status = 200, description = "Inquiry received", body = CreatedResp),
        (status = 422, description = "Inquiry failed validation", body = ValidationErrorResp)
    )
)]
pub async fn create_inquiry(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> ApiResponse<Json<CreatedResp>> {
    let inquiry = Inquiry::from_value(&body)?;

    let inserted_id = repo
        .inquiry
        .save(&inquiry)
        .await
        .into_response("failed to save inquiry")?;

    info!(task = "create inquiry", inserted_id = inserted_id.as_str());

    Ok(Json(CreatedResp { inserted_id }))
}
