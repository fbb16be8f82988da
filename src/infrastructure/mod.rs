pub mod transport;
pub mod ui;
