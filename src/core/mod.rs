pub mod add;
pub mod config;
pub mod del;
pub mod log;
pub mod reports;
pub mod repository;
