use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        teacher::{CreateTeacherDto, TeacherDto, UpdateTeacherDto},
    },
    server::{
        error::AppError,
        model::teacher::{Teacher, UpdateTeacherParams},
        service::teacher::TeacherService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

/// List all teachers ordered by id.
#[utoipa::path(
    get,
    path = "/teachers",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teachers", body = Vec<TeacherDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teachers = TeacherService::new(&state.db).get_all().await?;

    let dtos: Vec<TeacherDto> = teachers.into_iter().map(Teacher::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a teacher.
#[utoipa::path(
    post,
    path = "/teachers",
    tag = TEACHER_TAG,
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Successfully created teacher", body = TeacherDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_one(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = TeacherService::new(&state.db)
        .create(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(teacher.into_dto())))
}

/// Get one teacher.
///
/// # Returns
/// - `200 OK` - The teacher
/// - `400 Bad Request` - Id is not a number
/// - `404 Not Found` - No teacher with the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/teachers/{teacher_id}",
    tag = TEACHER_TAG,
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved teacher", body = TeacherDto),
        (status = 400, description = "Malformed teacher ID", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&teacher_id)?;

    let teacher = TeacherService::new(&state.db).get_one(id).await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Edit a teacher's name or phone.
///
/// # Returns
/// - `200 OK` - The updated teacher
/// - `400 Bad Request` - Id is not a number
/// - `404 Not Found` - No teacher with the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/teachers/{teacher_id}",
    tag = TEACHER_TAG,
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Successfully updated teacher", body = TeacherDto),
        (status = 400, description = "Malformed teacher ID", body = ErrorDto),
        (status = 404, description = "Teacher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_one(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
    Json(payload): Json<UpdateTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&teacher_id)?;

    let teacher = TeacherService::new(&state.db)
        .update(UpdateTeacherParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(teacher.into_dto())))
}

/// Delete a teacher.
///
/// A teacher that still leads a group cannot be deleted.
///
/// # Returns
/// - `200 OK` - Teacher deleted
/// - `400 Bad Request` - Id is not a number, or the teacher leads a group
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/teachers/{teacher_id}",
    tag = TEACHER_TAG,
    params(
        ("teacher_id" = i32, Path, description = "Teacher ID")
    ),
    responses(
        (status = 200, description = "Teacher deleted", body = SuccessDto),
        (status = 400, description = "Malformed teacher ID or teacher still leads a group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_one(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&teacher_id)?;

    TeacherService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Teacher is deleted"))))
}
