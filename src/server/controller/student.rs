use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        payment::CreatePaymentDto,
        search::{SearchQueryDto, SearchResultsDto},
        student::{
            CreateStudentDto, StudentDetailDto, StudentDto, StudentListItemDto,
            StudentSummaryDto, UpdateStudentDto,
        },
    },
    server::{
        error::AppError,
        model::{
            payment::NewPayment,
            student::{CreateStudentParams, StudentListItem, StudentSummary, UpdateStudentParams},
        },
        service::{search::SearchService, student::StudentService},
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// List all students.
///
/// Each student is flattened with the name of its group and of the group's teacher.
/// Both are omitted for students without a group.
///
/// # Returns
/// - `200 OK` - Students ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    let dtos: Vec<StudentListItemDto> =
        students.into_iter().map(StudentListItem::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a student.
///
/// Stores the student with any initial payments from `paymentHistory`. Payments follow
/// the same date and quantity coercion as a single added payment.
///
/// # Returns
/// - `200 OK` - The stored student
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Successfully created student", body = StudentDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_one(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateStudentParams::from_dto(payload, Utc::now());
    let student = StudentService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Get one student.
///
/// Returns the student merged with its group, the group's teacher and course, and the
/// payment history most recent first. An unknown id yields an empty object.
///
/// # Returns
/// - `200 OK` - Student detail, or `{}` when no student has the id
/// - `400 Bad Request` - Id is not a number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/select/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student detail or empty object", body = StudentDetailDto),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&student_id)?;

    let detail = StudentService::new(&state.db)
        .get_one(id)
        .await?
        .map(|detail| detail.into_dto())
        .unwrap_or_default();

    Ok((StatusCode::OK, Json(detail)))
}

/// Edit a student.
///
/// Updates the name, phone and info present in the body. The id always comes from the
/// path. Responds with `null` when no student has the id.
///
/// # Returns
/// - `200 OK` - Updated student or `null`
/// - `400 Bad Request` - Id is not a number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/students/select/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Updated student, or null for an unknown ID", body = Option<StudentDto>),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_one(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&student_id)?;

    let student = StudentService::new(&state.db)
        .update(UpdateStudentParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(student.map(|s| s.into_dto()))))
}

/// Delete a student.
///
/// Removes the student with its payments and group membership. Succeeds whether or not
/// the student existed.
///
/// # Returns
/// - `200 OK` - `{success: true, message: "Student is deleted"}`
/// - `400 Bad Request` - Id is not a number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/select/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = SuccessDto),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_one(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&student_id)?;

    StudentService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Student is deleted"))))
}

/// Add a payment.
///
/// Appends one payment to the student's history. A missing or unparseable `date` becomes
/// the time of the request; a non-numeric `quantity` becomes 0.
///
/// # Returns
/// - `200 OK` - `{success: true, message: "Payment is added"}`
/// - `400 Bad Request` - Id is not a number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students/select/{student_id}",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    request_body = CreatePaymentDto,
    responses(
        (status = 200, description = "Payment added", body = SuccessDto),
        (status = 400, description = "Malformed student ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn make_payment(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&student_id)?;

    let payment = NewPayment::from_dto(payload, Utc::now());
    StudentService::new(&state.db)
        .make_payment(id, payment)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Payment is added"))))
}

/// List students without a group.
///
/// # Returns
/// - `200 OK` - Unassigned students ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/unassigned",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Students without a group", body = Vec<StudentSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unassigned(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_unassigned().await?;

    let dtos: Vec<StudentSummaryDto> =
        students.into_iter().map(StudentSummary::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Search students and teachers.
///
/// Matches first name, last name and phone approximately. A missing or blank query
/// returns empty lists.
///
/// # Returns
/// - `200 OK` - `{students, teachers}`, best match first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/search",
    tag = STUDENT_TAG,
    params(SearchQueryDto),
    responses(
        (status = 200, description = "Search results", body = SearchResultsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let results = SearchService::new(&state.db)
        .search(params.search.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(results.into_dto())))
}
