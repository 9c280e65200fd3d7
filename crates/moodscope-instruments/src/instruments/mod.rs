pub mod dass21;
pub mod demographics;
pub mod swls;
