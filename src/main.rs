use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use seatrs::{
    App, Config, Logging, PROJECT_NAME, PROJECT_VERSION,
    config::ConfigOverrides,
    show_configuration,
    tui::{Console, Screen, Session},
};

#[derive(Parser)]
#[command(version = PROJECT_VERSION, about, long_about = None)]
pub struct UserArgs {
    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose (debug log on stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Config file to use instead of the default one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: ConfigOverrides,
}

#[derive(Subcommand)]
enum Command {
    /// Show Config
    #[command(visible_alias = "show-configuration")]
    ShowConfig,
}

fn init_logging(verbose: bool) -> Result<()> {
    if verbose {
        Logging::new().with_debug_mode(true).start()
    } else {
        let file_name = format!("{PROJECT_NAME}.log");
        Logging::new().with_file(file_name).start()
    }
}

fn load_config(args: &UserArgs) -> Result<(Config, Option<PathBuf>)> {
    let (mut config, source) = Config::load(args.config.as_deref())?;
    config.apply(&args.overrides);
    config.validate().context("Invalid configuration")?;
    Ok((config, source))
}

fn run_interactive(config: &Config) -> Result<()> {
    let console = Console::stdio(config.display.clear);
    let screen = Screen::new(config.hud_layout());
    let mut app = App::new(Session::new(console, screen), config.seat_grid());
    app.run()
}

fn main() -> Result<()> {
    let args = UserArgs::parse();

    init_logging(args.verbose)?;
    info!("{PROJECT_NAME} {PROJECT_VERSION}");

    let (config, source) = load_config(&args)?;

    match args.command {
        None => run_interactive(&config),
        Some(Command::ShowConfig) => {
            show_configuration(&config, source.as_deref());
            Ok(())
        }
    }
}
