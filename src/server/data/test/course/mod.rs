use crate::server::{
    data::course::CourseRepository,
    model::course::{CreateCourseParams, UpdateCourseParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;
