pub mod add;
pub mod cache;
pub mod calculator;
pub mod config;
pub mod log;
pub mod logic;
pub mod service;
pub mod source;
