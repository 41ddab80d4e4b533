// Startup prompts for the canvas dimensions, asked on the terminal.
// An empty answer (or closed input) dismisses the prompt and keeps the default.

use crate::config::Config;
use crate::error::Error;
use crate::types::CanvasSize;
use std::io::{BufRead, Write};
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
pub enum Answer {
    Dismissed,
    Value(u32),
    Invalid,
}

/// Interpret one line of input; numbers outside the allowed range are clamped.
pub fn parse_dimension(line: &str, config: &Config) -> Answer {
    let line = line.trim();
    if line.is_empty() {
        return Answer::Dismissed;
    }
    match line.parse::<i64>() {
        Ok(n) => Answer::Value(config.clamp_dimension(n)),
        Err(_) => Answer::Invalid,
    }
}

/// Ask for one dimension until the answer is a number or the prompt is dismissed.
pub fn ask_dimension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: u32,
    config: &Config,
) -> Result<u32, Error> {
    loop {
        write!(output, "{label} ({}-{}) [{default}]: ", config.min_dimension, config.max_dimension)
            .and_then(|_| output.flush())
            .map_err(|e| Error::Prompt(e.to_string()))?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|e| Error::Prompt(e.to_string()))?;
        if read == 0 {
            return Ok(default);
        }
        match parse_dimension(&line, config) {
            Answer::Dismissed => return Ok(default),
            Answer::Value(v) => return Ok(v),
            Answer::Invalid => {
                writeln!(output, "Not an integer, try again.")
                    .map_err(|e| Error::Prompt(e.to_string()))?;
            }
        }
    }
}

/// Ask for width then height.
pub fn canvas_size<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<CanvasSize, Error> {
    let width = ask_dimension(input, output, "Canvas Width", config.default_size.width, config)?;
    let height = ask_dimension(input, output, "Canvas Height", config.default_size.height, config)?;
    info!(width, height, "canvas size chosen");
    Ok(CanvasSize::new(width, height))
}
