pub mod config;
pub mod feed;
pub mod presenter;
pub mod tui;
