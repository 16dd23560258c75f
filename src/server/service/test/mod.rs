use crate::server::{
    error::AppError,
    model::{
        query::ListParams,
        school::{CreateSchoolParams, UpdateSchoolParams},
        student::{CreateStudentParams, StudentScope, UpdateStudentParams},
    },
    service::{populate::PopulateService, school::SchoolService, student::StudentService},
};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};


fn create_student_params(school_id: i32) -> CreateStudentParams {
    CreateStudentParams {
        school_id,
        first_name: "Nadia".to_string(),
        last_name: "Islam".to_string(),
        age: Some(Decimal::new(9, 0)),
        nationality: "Bangladeshi".to_string(),
        address: String::new(),
    }
}

fn update_student_params(id: i32) -> UpdateStudentParams {
    UpdateStudentParams {
        id,
        school_id: None,
        first_name: None,
        last_name: None,
        age: None,
        nationality: None,
        address: None,
    }
}

fn update_school_params(id: i32) -> UpdateSchoolParams {
    UpdateSchoolParams {
        id,
        name: None,
        max_students: None,
        city: None,
        country: None,
        address: None,
    }
}
