mod complaint;
mod student;
mod transaction;
