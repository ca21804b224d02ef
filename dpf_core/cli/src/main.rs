mod commands;

use crate::commands::{handle_check, handle_render, CheckArgs, RenderArgs};

use clap::{Parser, Subcommand};
use common::error::FFError;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "foundry-tasks")]
pub struct Cli {
    #[arg(
        long = "config-path",
        short = 'c',
        help = "directory holding foundry-tasks.yml",
        global = true
    )]
    pub config_path: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Render the task admin table as an HTML fragment
    Render(RenderArgs),
    /// Load and validate the project config and task file
    Check(CheckArgs),
}

fn run_cmd(func: Result<(), FFError>) {
    if let Err(e) = func {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    logging::init_logger(logging::DEFAULT_LEVEL);
    let cli = Cli::parse();

    match cli.command {
        Cmd::Render(args) => run_cmd(handle_render(&args, cli.config_path)),
        Cmd::Check(args) => run_cmd(handle_check(&args, cli.config_path)),
    }
}
