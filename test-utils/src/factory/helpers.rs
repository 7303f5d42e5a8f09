//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns a timestamp `offset_secs` seconds before now.
///
/// Used to give rows distinct, ordered creation times without sleeping.
pub fn seconds_ago(offset_secs: i64) -> DateTime<Utc> {
    Utc::now() - Duration::seconds(offset_secs)
}

/// Creates a student together with `count` transactions and `count` complaints.
///
/// Row `i` is created `count - i` minutes in the past, so the last row inserted is
/// the newest.
///
/// # Returns
/// - `Ok((student, transactions, complaints))` - Created entities in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_history(
    db: &DatabaseConnection,
    count: usize,
) -> Result<
    (
        entity::student::Model,
        Vec<entity::transaction::Model>,
        Vec<entity::complaint::Model>,
    ),
    DbErr,
> {
    let student = crate::factory::student::create_student(db).await?;

    let mut transactions = Vec::with_capacity(count);
    let mut complaints = Vec::with_capacity(count);
    for i in 0..count {
        let created_at = seconds_ago(((count - i) * 60) as i64);

        transactions.push(
            crate::factory::transaction::TransactionFactory::new(db, student.id)
                .created_at(created_at)
                .build()
                .await?,
        );
        complaints.push(
            crate::factory::complaint::ComplaintFactory::new(db, student.id)
                .created_at(created_at)
                .build()
                .await?,
        );
    }

    Ok((student, transactions, complaints))
}
