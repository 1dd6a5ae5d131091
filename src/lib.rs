pub mod config;
pub mod errors;
pub mod generator;
pub mod logger;
pub mod output;
