// src/lib.rs

pub mod api;
pub mod app;
pub mod config;
pub mod console;
pub mod constants;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod models;
pub mod reply;
pub mod session;
pub mod status_indicator;
pub mod terminal;
pub mod transcript;
pub mod ui;
