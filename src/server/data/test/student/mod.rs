use crate::server::{
    data::student::StudentRepository,
    model::student::{CreateStudentParam, Credential},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod add_paid_fee;
mod create;
mod find_by_roll_number;
