use axum::{http::StatusCode, Json};

use crate::response::ErrorResp;

pub(super) async fn get_404() -> (StatusCode, Json<ErrorResp>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResp {
            detail: "Not Found".to_string(),
        }),
    )
}
