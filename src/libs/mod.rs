pub mod config;
pub mod writing;
