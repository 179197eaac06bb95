use crate::server::{
    data::teacher::TeacherRepository,
    model::{
        person::PersonName,
        teacher::{CreateTeacherParams, UpdateTeacherParams},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_ids;
mod update;
