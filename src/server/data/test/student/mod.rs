use crate::server::{
    data::student::StudentRepository,
    model::{
        query::ListParams,
        student::{CreateStudentParams, StudentOrderField, StudentScope, UpdateStudentParams},
    },
};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_in_scope;
mod list;
mod update;
