pub mod answers;
pub mod assessment;
pub mod mood;
pub mod record;
