use std::path::PathBuf;

use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use automaterials::app::{App, AppState};
use automaterials::groups::DivisionMode;
use automaterials::{logging, Error};

/// Interactive divider: drop an .obj on the window, pick a mode with U/P, export with E.
#[derive(Parser)]
#[command(name = "automaterials-gui", version)]
struct Cli {
    /// .obj file to load on start
    input: Option<PathBuf>,

    /// Initial division mode
    #[arg(long, value_enum, default_value = "per-uv-group")]
    mode: DivisionMode,

    /// Directory for exported files (defaults to the input's directory)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut state = AppState::new(cli.mode);
    if let Some(input) = &cli.input {
        state = state.load(input);
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(state, cli.out_dir);
    event_loop.run_app(&mut app)?;

    return app.finish();
}
