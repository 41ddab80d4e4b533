pub mod app;
pub mod brush;
pub mod canvas;
pub mod config;
pub mod controls;
pub mod dialogs;
pub mod draw;
pub mod error;
pub mod input;
pub mod logging;
pub mod prompt;
pub mod stroke;
pub mod surface;
pub mod types;
