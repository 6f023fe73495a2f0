pub mod field;
pub mod gender;
pub mod lock_mask;
pub mod profile;
