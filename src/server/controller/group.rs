use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        group::{CreateGroupDto, GroupDetailDto, GroupDto, UpdateGroupDto},
    },
    server::{
        error::AppError,
        model::group::{GroupListItem, UpdateGroupParams},
        service::group::GroupService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// List all groups with their member counts.
#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;

    let dtos: Vec<GroupDto> = groups.into_iter().map(GroupListItem::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a group.
///
/// The teacher, the course and every listed student must exist.
///
/// # Returns
/// - `201 Created` - The group with teacher, course and members resolved
/// - `400 Bad Request` - A referenced teacher, course or student does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Successfully created group", body = GroupDetailDto),
        (status = 400, description = "Unknown teacher, course or student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_one(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Get one group with its teacher, course and members.
#[utoipa::path(
    get,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDetailDto),
        (status = 400, description = "Malformed group ID", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_one(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&group_id)?;

    let group = GroupService::new(&state.db).get_one(id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Edit a group.
///
/// Only fields present in the body change. A present `students` list replaces the
/// membership.
///
/// # Returns
/// - `200 OK` - The updated group
/// - `400 Bad Request` - Malformed id, or a referenced teacher, course or student does not exist
/// - `404 Not Found` - No group with the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = GroupDetailDto),
        (status = 400, description = "Malformed ID or unknown reference", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_one(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&group_id)?;

    let group = GroupService::new(&state.db)
        .update(UpdateGroupParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group; its students stay and become unassigned.
#[utoipa::path(
    delete,
    path = "/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group deleted", body = SuccessDto),
        (status = 400, description = "Malformed group ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_one(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&group_id)?;

    GroupService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(SuccessDto::new("Group is deleted"))))
}
