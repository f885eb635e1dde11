use clap::Parser;
use kiln_build::{Config, Generator, Preamble};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kiln")]
#[command(author, version, about = "Generate Ninja build files from kiln configs")]
struct Cli {
    /// Project config document
    config: PathBuf,

    /// Preamble document (default: <kiln-binary>.preamble)
    #[arg(long)]
    preamble: Option<PathBuf>,

    /// Write the build file here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Usage and argument errors exit with status 1, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    let preamble_path = match cli.preamble {
        Some(path) => path,
        None => default_preamble_path()?,
    };

    let preamble = Preamble::from_file(&preamble_path).into_diagnostic()?;
    let config = Config::from_file(&cli.config).into_diagnostic()?;

    let build_file = Generator::new().generate(&preamble, &config).into_diagnostic()?;

    match cli.output {
        Some(path) => std::fs::write(&path, &build_file)
            .map_err(|e| miette::miette!("Failed to write {}: {}", path.display(), e))?,
        None => print!("{build_file}"),
    }

    Ok(())
}

/// The preamble lives next to the binary as `<binary>.preamble`, so one
/// installed toolchain description serves every project.
fn default_preamble_path() -> Result<PathBuf> {
    let exe = std::env::args_os()
        .next()
        .ok_or_else(|| miette::miette!("Cannot determine own executable path"))?;

    let mut path = exe;
    path.push(".preamble");
    Ok(PathBuf::from(path))
}
