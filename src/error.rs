// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    WindowInit(String),   // Creating the window failed
    WindowUpdate(String), // Presenting the framebuffer failed
    Prompt(String),       // Reading a startup prompt from the terminal failed
    Save(String),         // Encoding or writing the PNG failed
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::Prompt(s) => write!(f, "Prompt error: {s}"),
            Error::Save(s) => write!(f, "Save error: {s}"),
        }
    }
}

impl std::error::Error for Error {}
