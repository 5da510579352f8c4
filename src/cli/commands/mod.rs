pub mod add;
pub mod chart;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
