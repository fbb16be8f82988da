pub mod api;
pub mod client;
pub mod display;
pub mod errors;
pub mod models;
