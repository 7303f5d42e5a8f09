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
                    .table(Complaint::Table)
                    .if_not_exists()
                    .col(pk_auto(Complaint::Id))
                    .col(integer(Complaint::StudentId))
                    .col(string_len(Complaint::Subject, 200))
                    .col(text(Complaint::Message))
                    .col(string_len(Complaint::Status, 20).default("open"))
                    .col(
                        timestamp(Complaint::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Complaint::ResolvedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaint_student_id")
                            .from(Complaint::Table, Complaint::StudentId)
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
                    .name("idx_complaint_student_created")
                    .table(Complaint::Table)
                    .col(Complaint::StudentId)
                    .col(Complaint::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Complaint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Complaint {
    Table,
    Id,
    StudentId,
    Subject,
    Message,
    Status,
    CreatedAt,
    ResolvedAt,
}
