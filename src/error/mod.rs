pub mod common;
pub mod field;
