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

/// Add a testimonial
#[utoipa::path(
    post,
    path = "/testimonials",
    request_body = Testimonial,
    responses(
        (status = 200, description = "Testimonial created", body = CreatedResp),
        (status = 422, description = "Testimonial failed validation", body = ValidationErrorResp)
    )
)]
pub async fn create_testimonial(
    State(repo): State<Repository>,
    WithRejection(Json(body), _): WithRejection<Json<Value>, ApiError>,
) -> ApiResponse<Json<CreatedResp>> {
    let testimonial = Testimonial::from_value(&body)?;

    let inserted_id = repo
        .testimonial
        .save(&testimonial)
        .await
        .into_response("failed to save testimonial")?;

    info!(task = "create testimonial", inserted_id = inserted_id.as_str());

    Ok(Json(CreatedResp { inserted_id }))
}

/// List testimonials
#[utoipa::path(
    get,
    path = "/testimonials",
    responses(
        (status = 200, description = "List testimonials successfully", body = [Testimonial])
    )
)]
pub async fn get_testimonials(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<Testimonial>>> {
    let testimonials = repo
        .testimonial
        .find(Filter::new(), LIST_LIMIT)
        .await
        .into_response("failed to list testimonials")?;

    Ok(Json(testimonials))
}
