use crate::server::{data::payment::PaymentRepository, model::payment::NewPayment};
use chrono::{TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_student;
