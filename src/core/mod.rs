pub mod analyze;
pub mod calculator;
pub mod config;
pub mod logic;
