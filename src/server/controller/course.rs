use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        course::{CourseDto, CreateCourseDto, UpdateCourseDto},
    },
    server::{
        error::AppError,
        model::course::{Course, UpdateCourseParams},
        service::course::CourseService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

#[utoipa::path(
    get,
    path = "/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).get_all().await?;

    let dtos: Vec<CourseDto> = courses.into_iter().map(Course::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_one(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(course.into_dto())))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 400, description = "Malformed course ID", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&course_id)?;

    let course = CourseService::new(&state.db).get_one(id).await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 400, description = "Malformed course ID", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_one(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&course_id)?;

    let course = CourseService::new(&state.db)
        .update(UpdateCourseParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(course.into_dto())))
}

/// Delete a course that no group studies.
#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course deleted", body = SuccessDto),
        (status = 400, description = "Malformed course ID or course still in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_one(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&course_id)?;

    CourseService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Course is deleted"))))
}
