use clap::{Args, Parser, Subcommand};

use crate::config::TimeArgs;

#[derive(Parser)]
#[command(name = "chessclock")]
#[command(about = "A two-player chess clock for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub play: PlayArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the clock (the default when no subcommand is given)
    Play(PlayArgs),

    /// Print the effective configuration as TOML
    Config,

    /// Show where config and log files are stored
    Paths,
}

#[derive(Args, Clone, Default)]
pub struct PlayArgs {
    /// Time for both players, e.g. 5m, 90, 1h30m, 2min30sec
    #[arg(long)]
    pub t: Option<String>,

    /// Time for the left player (overrides --t)
    #[arg(long)]
    pub t1: Option<String>,

    /// Time for the right player (overrides --t)
    #[arg(long)]
    pub t2: Option<String>,

    /// Hide the pause / fullscreen / reset buttons
    #[arg(long)]
    pub no_buttons: bool,
}

impl PlayArgs {
    pub fn time_args(&self) -> TimeArgs {
        TimeArgs {
            t: self.t.clone(),
            t1: self.t1.clone(),
            t2: self.t2.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_plays_with_defaults() {
        let cli = Cli::parse_from(["chessclock"]);
        assert!(cli.command.is_none());
        assert!(cli.play.t.is_none());
        assert!(!cli.play.no_buttons);
    }

    #[test]
    fn top_level_time_flags() {
        let cli = Cli::parse_from(["chessclock", "--t", "3m", "--t2", "90"]);
        let args = cli.play.time_args();
        assert_eq!(args.t.as_deref(), Some("3m"));
        assert_eq!(args.t2.as_deref(), Some("90"));
        assert!(args.t1.is_none());
    }

    #[test]
    fn play_subcommand_flags() {
        let cli = Cli::parse_from(["chessclock", "play", "--t1", "1h", "--no-buttons"]);
        match cli.command {
            Some(Command::Play(args)) => {
                assert_eq!(args.t1.as_deref(), Some("1h"));
                assert!(args.no_buttons);
            }
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn paths_subcommand() {
        let cli = Cli::parse_from(["chessclock", "paths"]);
        assert!(matches!(cli.command, Some(Command::Paths)));
    }
}
