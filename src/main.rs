//! hdrdoc: generate Markdown API documentation from annotated C headers.
//!
//! Reads one header, pairs each `/** ... */` block carrying `@brief`,
//! `@param` and `@return` tags with the declaration that follows it, and
//! writes the reference to stdout:
//!
//! - `hdrdoc include/perfume.h > API.md`
//! - `hdrdoc --format json include/perfume.h`

#[macro_use]
mod logs;
mod model;
mod parser;
mod render;
mod source;
mod wrap;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "Usage: hdrdoc <header-file>";

#[derive(Parser)]
#[command(
    name = "hdrdoc",
    version,
    about = "Generate Markdown API documentation from annotated C headers"
)]
struct Cli {
    /// Header file to document (exactly one)
    #[arg(value_name = "HEADER")]
    files: Vec<PathBuf>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Wrap width for free text in markdown output (0 disables wrapping)
    #[arg(short = 'w', long, default_value_t = wrap::DEFAULT_WIDTH)]
    width: usize,

    /// Report comment blocks that produced no documentation
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{}", e);
            println!("{}", USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    // Usage goes to stdout, not stderr.
    let [header] = cli.files.as_slice() else {
        println!("{}", USAGE);
        return Ok(ExitCode::FAILURE);
    };

    println!("{}", generate(&cli, header)?);
    Ok(ExitCode::SUCCESS)
}

/// Read, parse and render a single header.
fn generate(cli: &Cli, header: &Path) -> Result<String> {
    let renderer = render::create_renderer(&cli.format, cli.width)?;
    let lines = source::read_lines(header)?;
    let report = parser::parse(&lines);

    for skipped in &report.skipped {
        vlog!(cli, { "{}: skipped {}", header.display(), skipped });
    }
    vlog!(cli, { "{}: {} documented function(s)", header.display(), report.functions.len() });

    renderer.render(&report.functions)
}
