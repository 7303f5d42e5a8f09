pub use super::complaint::Entity as Complaint;
pub use super::student::Entity as Student;
pub use super::transaction::Entity as Transaction;
