use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;

use automaterials::export::convert;
use automaterials::groups::DivisionMode;
use automaterials::{logging, Error};

/// Writes a copy of an OBJ file with one material per UV island.
#[derive(Parser)]
#[command(name = "automaterials", version)]
struct Cli {
    /// Wavefront .obj file to read
    input: PathBuf,

    /// Base name of the written .obj/.mtl pair
    #[arg(default_value = "output")]
    output: PathBuf,

    /// How polygons are split into materials
    #[arg(long, value_enum, default_value = "per-uv-group")]
    mode: DivisionMode,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    ExitCode::SUCCESS
                }
                ErrorKind::MissingRequiredArgument => {
                    println!("{}", Error::MissingArgument);
                    ExitCode::FAILURE
                }
                _ => {
                    println!("{}", e);
                    ExitCode::FAILURE
                }
            };
        }
    };

    logging::init(cli.verbose);

    match convert(&cli.input, &cli.output, cli.mode) {
        Ok(conversion) => {
            info!(
                "{} polygons, {} materials ({}) in {} and {}",
                conversion.polygons,
                conversion.groups,
                cli.mode,
                conversion.paths.obj.display(),
                conversion.paths.mtl.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
