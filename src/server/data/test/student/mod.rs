use crate::server::{
    data::student::StudentRepository,
    model::{
        payment::NewPayment,
        person::PersonName,
        student::{CreateStudentParams, UpdateStudentParams},
    },
};
use chrono::{TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod get_unassigned;
mod update;
