pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod tea;
pub mod theme;
pub mod ui;

pub use app::App;
