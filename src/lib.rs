pub mod app;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod notify;
pub mod pipeline;
pub mod summary;
pub mod ui;
pub mod utils;
