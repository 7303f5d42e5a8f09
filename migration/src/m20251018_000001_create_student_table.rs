use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_len_uniq(Student::RollNumber, 20))
                    .col(string_len(Student::Name, 100))
                    .col(string_len_uniq(Student::Email, 120))
                    .col(string_len(Student::PasswordHash, 200))
                    .col(string_len(Student::Department, 50))
                    .col(integer(Student::Year))
                    .col(double(Student::TotalFee).default(0.0))
                    .col(double(Student::PaidFee).default(0.0))
                    .col(
                        timestamp(Student::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    RollNumber,
    Name,
    Email,
    PasswordHash,
    Department,
    Year,
    TotalFee,
    PaidFee,
    CreatedAt,
}
