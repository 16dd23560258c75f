use crate::server::{
    data::school::SchoolRepository,
    model::{
        query::ListParams,
        school::{CreateSchoolParams, SchoolOrderField, UpdateSchoolParams},
    },
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod list;
mod update;
