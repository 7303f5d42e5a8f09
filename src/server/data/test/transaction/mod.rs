use crate::server::{
    data::transaction::TransactionRepository,
    model::transaction::{CreateTransactionParam, TransactionStatus},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_student;
