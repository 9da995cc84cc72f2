pub mod config;
pub mod dataset;
pub mod db;
pub mod error;
pub mod loader;
pub mod types;
