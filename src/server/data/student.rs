//! Student data repository.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::student::{CreateStudentParam, Student};

/// Repository for student records.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository on a connection or an open transaction.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The inserted student with its generated id
    /// - `Err(DbErr)` - Insert failed, including unique violations on roll number or email
    pub async fn create(&self, param: CreateStudentParam) -> Result<Student, DbErr> {
        let entity = entity::prelude::Student::insert(entity::student::ActiveModel {
            roll_number: ActiveValue::Set(param.roll_number),
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.credential.as_phc().to_string()),
            department: ActiveValue::Set(param.department),
            year: ActiveValue::Set(param.year),
            total_fee: ActiveValue::Set(param.total_fee),
            paid_fee: ActiveValue::Set(param.paid_fee),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Finds a student by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student found
    /// - `Ok(None)` - No student with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Finds a student by exact, case-sensitive roll number.
    pub async fn find_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find()
            .filter(entity::student::Column::RollNumber.eq(roll_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Checks whether any student exists.
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        Ok(self.count().await? > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find().count(self.db).await
    }

    /// Adds `amount` to a student's paid fee in a single UPDATE.
    ///
    /// The increment is computed by the database: `paid_fee = paid_fee + amount`.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student after the update
    /// - `Ok(None)` - No student with that id, nothing was updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn add_paid_fee(&self, id: i32, amount: f64) -> Result<Option<Student>, DbErr> {
        let result = entity::prelude::Student::update_many()
            .col_expr(
                entity::student::Column::PaidFee,
                Expr::col(entity::student::Column::PaidFee).add(amount),
            )
            .filter(entity::student::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }
}
