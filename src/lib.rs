pub mod app;
pub mod command;
pub mod config;
pub mod menu;
pub mod paths;
pub mod settings;
pub mod tray;
