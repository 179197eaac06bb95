use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::server::controller::{course, group, student, teacher};

/// OpenAPI document covering every route of the service.
#[derive(OpenApi)]
#[openapi(
    info(title = "edcenter", description = "Education center administration API"),
    paths(
        student::get_all,
        student::create_one,
        student::get_one,
        student::edit_one,
        student::remove_one,
        student::make_payment,
        student::get_unassigned,
        student::search,
        teacher::get_all,
        teacher::create_one,
        teacher::get_one,
        teacher::edit_one,
        teacher::remove_one,
        course::get_all,
        course::create_one,
        course::get_one,
        course::edit_one,
        course::remove_one,
        group::get_all,
        group::create_one,
        group::get_one,
        group::edit_one,
        group::remove_one,
    ),
    tags(
        (name = "student", description = "Students, payments and search"),
        (name = "teacher", description = "Teachers"),
        (name = "course", description = "Courses"),
        (name = "group", description = "Groups and their members"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
