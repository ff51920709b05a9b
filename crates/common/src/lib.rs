pub mod config;
pub mod networks;
