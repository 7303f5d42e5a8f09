//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `*Factory` builder for customization and a
//! `create_*` function for the default case.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//! let transaction = factory::create_transaction(&db, student.id).await?;
//!
//! let (student, transactions, complaints) =
//!     factory::helpers::create_student_with_history(&db, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::student::StudentFactory;
//!
//! let student = StudentFactory::new(&db)
//!     .roll_number("2021001")
//!     .fees(50000.0, 30000.0)
//!     .build()
//!     .await?;
//! ```

pub mod complaint;
pub mod helpers;
pub mod student;
pub mod transaction;

pub use complaint::create_complaint;
pub use student::{create_student, create_student_with_roll};
pub use transaction::create_transaction;
