use crate::server::{
    data::group::GroupRepository,
    model::group::{CreateGroupParams, UpdateGroupParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod first_group_for_students;
mod get_all;
mod update;
