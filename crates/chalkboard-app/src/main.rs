//! Chalkboard script runner.
//!
//! Reads a gesture script (from a file or stdin), replays it on a fresh
//! board and prints a JSON report of the result.

use chalkboard_app::{run_script, AppError, Step};
use chalkboard_core::{Canvas, CanvasConfig};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "chalkboard", about = "Replay a whiteboard gesture script and report the board")]
struct Cli {
    /// JSON canvas config; unset fields keep their defaults.
    #[arg(long, env = "CHALKBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Script to replay. Read from stdin when omitted.
    script: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => CanvasConfig::load(path)?,
        None => CanvasConfig::default(),
    };

    let script = match &cli.script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let steps = Step::parse_script(&script)?;
    let mut canvas = Canvas::with_config(config);
    let report = run_script(&mut canvas, &steps)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::init();
    log::info!("Starting Chalkboard");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("chalkboard: {err}");
            ExitCode::FAILURE
        }
    }
}
