use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::ValidationError;
use repository::RepositoryError;
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::ApiError;

#[derive(Serialize, ToSchema)]
pub struct CreatedResp {
    pub inserted_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResp {
    pub detail: String,
}

#[derive(Serialize, ToSchema)]
pub struct FieldErrorResp {
    /// `["body", <field>]`
    pub loc: Vec<String>,
    pub msg: String,
}

#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResp {
    pub detail: Vec<FieldErrorResp>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::ClientError(status, detail) => {
                (status, Json(ErrorResp { detail })).into_response()
            }
            ApiError::ValidationError(e) => {
                let detail = e
                    .errors()
                    .iter()
                    .map(|e| {
                        let mut loc = vec!["body".to_string()];
                        if e.field != "body" {
                            loc.push(e.field.clone());
                        }
                        FieldErrorResp {
                            loc,
                            msg: e.reason.to_string(),
                        }
                    })
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrorResp { detail }),
                )
                    .into_response()
            }
            ApiError::ServerError(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResp { detail }),
            )
                .into_response(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        warn!(task = "validate", error = %e);
        ApiError::ValidationError(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ClientError(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::ClientError(rejection.status(), rejection.body_text())
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, RepositoryError> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(task = message, error = %e);
            ApiError::ServerError(format!("{message}: {e}"))
        })
    }
}
