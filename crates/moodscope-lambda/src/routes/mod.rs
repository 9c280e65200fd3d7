pub mod assessments;
pub mod classify;
pub mod health;
pub mod instruments;
