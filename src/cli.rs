use std::io::{self, Write};

use crate::{translate, Mode, TranslateError};

/// Validated command line: `<program> "<description>" [mode]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub description: String,
    pub mode: Mode,
}

impl Request {
    /// `args` includes the program name at index 0. Anything past the mode is ignored.
    pub fn from_args(args: &[String]) -> Result<Self, TranslateError> {
        let description = args.get(1).ok_or(TranslateError::MissingArgument)?;
        let mode = match args.get(2) {
            Some(mode) => mode.parse()?,
            None => Mode::default(),
        };

        Ok(Request {
            description: description.clone(),
            mode,
        })
    }
}

pub fn write_usage<W: Write>(program: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "Usage: {} \"PR description here\" [mode]", program)?;
    writeln!(out, "Modes: normal (tech→human), tech (human→tech)")
}

/// Parses `args`, translates, and writes the result to `out`.
///
/// A missing description prints usage and an unknown mode prints an error
/// message. Neither is a failure; only I/O errors on `out` are returned.
pub fn run<W: Write>(args: &[String], out: &mut W) -> io::Result<()> {
    let program = args.first().map(String::as_str).unwrap_or("prtranslate");

    match Request::from_args(args) {
        Ok(request) => {
            log::debug!("mode: {}", request.mode);
            writeln!(out, "{}", translate(&request.description, request.mode))
        }
        Err(TranslateError::MissingArgument) => {
            log::info!("no description given, printing usage");
            write_usage(program, out)
        }
        Err(e) => {
            log::debug!("rejected input: {:?}", e);
            writeln!(out, "{}", e)
        }
    }
}
