//! Small helpers shared by the model and service layers.

pub mod parse;
pub mod password;
pub mod time;
