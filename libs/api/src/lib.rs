use axum::{http::StatusCode, routing::get, routing::post, Router};

use entity::prelude::*;
use repository::Repository;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::response::{
    CreatedResp, ErrorResp, FieldErrorResp, ValidationErrorResp,
};

pub mod healthz;
pub mod inquiry;
pub mod not_found;
pub mod post;
pub mod program;
mod request;
mod response;
pub mod stat;
pub mod testimonial;

pub use response::{ApiResponse, IntoApiResponse};

#[derive(Debug)]
pub enum ApiError {
    /// Request could not be read: malformed body, missing content type,
    /// unparsable query.
    ClientError(StatusCode, String),
    ValidationError(ValidationError),
    ServerError(String),
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Unshakeable Discipline API", version = "1.0.0"),
    paths(
        healthz::get_root,
        healthz::get_test,
        program::create_program,
        program::get_programs,
        post::create_post,
        post::get_posts,
        testimonial::create_testimonial,
        testimonial::get_testimonials,
        stat::create_stat,
        stat::get_stats,
        inquiry::create_inquiry,
    ),
    components(schemas(
        Program,
        Post,
        Testimonial,
        Inquiry,
        Stat,
        CreatedResp,
        ErrorResp,
        FieldErrorResp,
        ValidationErrorResp,
        healthz::StatusResp,
        healthz::TestResp,
    ))
)]
pub struct ApiDoc;

pub fn router(repository: Repository) -> Router {
    info!(task = "build api router");

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .route("/", get(healthz::get_root))
        .route("/test", get(healthz::get_test))
        .route(
            "/programs",
            get(program::get_programs).post(program::create_program),
        )
        .route("/posts", get(post::get_posts).post(post::create_post))
        .route(
            "/testimonials",
            get(testimonial::get_testimonials)
                .post(testimonial::create_testimonial),
        )
        .route("/stats", get(stat::get_stats).post(stat::create_stat))
        // write-only: any other method is not found rather than 405
        .route(
            "/inquiries",
            post(inquiry::create_inquiry).fallback(not_found::get_404),
        )
        .fallback(not_found::get_404)
        .with_state(repository)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
