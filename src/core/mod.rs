pub mod command_parser;
pub mod config;
pub mod error;
pub mod planner;
pub mod types;
