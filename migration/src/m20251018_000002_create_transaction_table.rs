use sea_orm_migration::{prelude::*, schema::*};

use super::m20251018_000001_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transaction::Table)
                    .if_not_exists()
                    .col(pk_auto(Transaction::Id))
                    .col(integer(Transaction::StudentId))
                    .col(double(Transaction::Amount))
                    .col(string_len(Transaction::PaymentMethod, 50))
                    .col(string_len_uniq(Transaction::TransactionId, 100))
                    .col(string_len(Transaction::Status, 20).default("pending"))
                    .col(
                        timestamp(Transaction::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(text(Transaction::Description).default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transaction_student_id")
                            .from(Transaction::Table, Transaction::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transaction_student_created")
                    .table(Transaction::Table)
                    .col(Transaction::StudentId)
                    .col(Transaction::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Transaction {
    Table,
    Id,
    StudentId,
    Amount,
    PaymentMethod,
    TransactionId,
    Status,
    CreatedAt,
    Description,
}
