pub mod announcement;
pub mod shared;
pub mod translation;
