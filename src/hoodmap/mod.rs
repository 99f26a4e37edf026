pub mod handlers;
pub mod models;
pub mod pins;
pub mod requests;
pub mod responses;
#[cfg(test)]
mod tests;
