use crate::server::{
    data::complaint::ComplaintRepository,
    model::complaint::{ComplaintStatus, CreateComplaintParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_student;
