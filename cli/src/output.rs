use std::io::Write;

use mitate::Description;
use serde::Serialize;

use crate::error::Result;

#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Indented `Name: Value` text
    Text,
    /// One JSON object per input
    Json,
}

#[derive(Serialize)]
struct Record<'a> {
    path: &'a str,
    description: &'a Description,
}

/// Writes one inspected input. `path` is `None` for stdin.
pub(crate) fn write(
    out: &mut impl Write,
    format: OutputFormat,
    path: Option<&str>,
    description: &Description,
) -> Result<()> {
    match format {
        OutputFormat::Text => match path {
            Some(path) => write!(out, "{}: {}", path, description)?,
            None => write!(out, "{}", description)?,
        },
        OutputFormat::Json => {
            let record = Record {
                path: path.unwrap_or("-"),
                description,
            };
            serde_json::to_writer(&mut *out, &record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
