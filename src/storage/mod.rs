pub mod interface;
pub mod reviews;
