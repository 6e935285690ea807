pub mod announcement;
pub mod health;
pub mod language;
pub mod translation;
