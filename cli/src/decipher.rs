use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::output::{self, OutputFormat};
use crate::utils::{collect_files, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Files to inspect. Reads stdin when none are given or for `-`
    files: Vec<PathBuf>,

    /// Descend into directories
    #[arg(short, long)]
    recursive: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.files.is_empty() {
        describe(&mut out, config.output, None)?;
    }
    for file in &config.files {
        if file.as_os_str() == "-" {
            describe(&mut out, config.output, None)?;
            continue;
        }
        for path in collect_files(file, config.recursive)? {
            if let Err(e) = describe(&mut out, config.output, Some(&path)) {
                tracing::warn!(path = %path.display(), error = %e, "failed to inspect file");
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn describe(out: &mut impl Write, format: OutputFormat, path: Option<&Path>) -> Result<()> {
    let data = read_input(path)?;
    let description = mitate_inspect::inspect(&data);
    let display = path.map(|p| p.display().to_string());
    output::write(out, format, display.as_deref(), &description)
}
