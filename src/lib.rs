pub mod browser;
pub mod config;
pub mod content;
pub mod output;
pub mod scoring;
pub mod stderr_log;
pub mod tui;
