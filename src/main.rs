mod cli;
mod clock;
mod config;
mod controller;
mod hit;
mod layout;
mod logging;
mod paths;
mod render;
mod tui;
mod util;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use cli::{Cli, Command, PlayArgs};
use clock::{format_time, GameStatus, Side};
use config::AppConfig;
use controller::Controller;

fn main() -> Result<()> {
    run(Cli::parse(), config::load_config)
}

/// Dispatch a parsed command line. The config file is only read by commands
/// that use it, so `paths` still works when config.toml is broken.
fn run(cli: Cli, load: impl FnOnce() -> Result<AppConfig>) -> Result<()> {
    match cli.command {
        None => play(&load()?, &cli.play),
        Some(Command::Play(args)) => play(&load()?, &args),
        Some(Command::Config) => {
            let config = load()?;
            let toml_str = toml::to_string_pretty(&config).context("Failed to render config")?;
            print!("{toml_str}");
            Ok(())
        }
        Some(Command::Paths) => {
            println!("  {:8} {}", style("Config").bold(), paths::config_file().display());
            println!("  {:8} {}", style("Log").bold(), paths::log_file().display());
            Ok(())
        }
    }
}

fn play(config: &AppConfig, args: &PlayArgs) -> Result<()> {
    // Bad times are rejected before the terminal is touched.
    let initial = config.initial_times(&args.time_args())?;

    logging::init(&paths::log_file(), &config.logging.level)?;
    log::info!(
        "starting with {}s / {}s",
        initial.left,
        initial.right
    );

    let buttons = config.display.buttons && !args.no_buttons;
    let mut controller = Controller::new(initial, config.palette, buttons);
    let tick_rate = Duration::from_millis(config.display.tick_rate_ms.max(1));

    let mut terminal = tui::init()?;
    let result = tui::screen::run(&mut terminal, &mut controller, tick_rate);
    tui::restore()?;
    result?;

    print_summary(&controller);
    Ok(())
}

fn print_summary(controller: &Controller) {
    let game = controller.game();
    if game.status() == GameStatus::NotStarted {
        return;
    }

    println!();
    for side in Side::BOTH {
        let remaining = format_time(game.player(side).remaining());
        let line = format!("  {:6} {}", side.label(), remaining);
        if game.flagged_side() == Some(side) {
            println!("{}  {}", line, style("flag fell").red().bold());
        } else {
            println!("{line}");
        }
    }
    println!();
}
