//! Application orchestration and command routing.
//!
//! Handles command-line argument parsing and delegates to appropriate command handlers.

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

use crate::commands::{self, ScrubOverrides};
use crate::logging;
use crate::scrub::AdjustDirection;
use crate::setup;

/// Play back recordings with a rotary wheel scrubber
#[derive(Parser)]
#[command(name = "hofetch")]
#[command(version)]
#[command(
    long_about = "Play back recordings with a rotary wheel scrubber.\n\nOne full turn of the wheel moves playback by the configured seconds per turn.\nSmall rotations inside the dead zone are ignored, and a feedback tick fires\nevery quarter turn.\n\nEXAMPLES:\n    # Half a turn forward from 0:50 in a 100s recording\n    $ hofetch scrub --duration 100 --current 50 0.5 1.5 3.14159\n\n    # Same gesture in degrees\n    $ hofetch scrub -d 100 -c 50 --degrees 30 90 180\n\n    # Step back one adjust step\n    $ hofetch seek -d 100 -c 50 --back"
)]
#[command(
    after_help = "CONFIGURATION:\n    Config file:        ~/.config/hofetch/hofetch.toml\n    Logs:               ~/.local/state/hofetch/hofetch.log.*"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Scrubber settings that override the config file for one invocation.
#[derive(Args, Debug, Clone, Copy)]
struct SettingsArgs {
    /// Playback seconds covered by one full turn
    #[arg(short = 's', long, value_name = "SECONDS")]
    seconds_per_turn: Option<f64>,

    /// Rotation in radians ignored as jitter
    #[arg(short = 'z', long, value_name = "RADIANS")]
    dead_zone: Option<f64>,
}

impl SettingsArgs {
    fn overrides(self) -> ScrubOverrides {
        ScrubOverrides {
            seconds_per_turn: self.seconds_per_turn,
            dead_zone: self.dead_zone,
            adjust_step: None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one wheel gesture against a recording timeline
    ///
    /// Each ANGLE is the accumulated rotation since the gesture began; the last
    /// one is also where the wheel is released.
    #[command(visible_alias = "s")]
    Scrub {
        /// Length of the recording in seconds
        #[arg(short, long)]
        duration: f64,

        /// Playback position when the gesture starts
        #[arg(short, long, default_value_t = 0.0)]
        current: f64,

        /// Read angles as degrees instead of radians
        #[arg(long)]
        degrees: bool,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Accumulated rotation for each update
        #[arg(value_name = "ANGLE", required = true, num_args = 1.., allow_negative_numbers = true)]
        angles: Vec<f64>,
    },

    /// Step playback forward or back, like the wheel's accessibility action
    Seek {
        /// Length of the recording in seconds
        #[arg(short, long)]
        duration: f64,

        /// Playback position before the step
        #[arg(short, long)]
        current: f64,

        /// Step forward
        #[arg(long, conflicts_with = "back", required_unless_present = "back")]
        forward: bool,

        /// Step back
        #[arg(long)]
        back: bool,

        /// Seconds per step (defaults to the configured adjust step)
        #[arg(long, value_name = "SECONDS")]
        step: Option<f64>,
    },

    /// Convert one wheel angle into a playback offset
    Convert {
        /// Accumulated rotation
        #[arg(value_name = "ANGLE", allow_negative_numbers = true)]
        angle: f64,

        /// Read the angle as degrees instead of radians
        #[arg(long)]
        degrees: bool,

        /// Map the angle without the dead-zone gate
        #[arg(long)]
        no_dead_zone: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Open configuration file in your preferred editor
    ///
    /// Uses $EDITOR environment variable or falls back to nano/vi.
    /// With --reset, writes the default settings instead.
    #[command(visible_alias = "c")]
    Config {
        /// Overwrite the config file with the default settings instead of editing it
        #[arg(long)]
        reset: bool,
    },

    /// Show recent log entries from the application
    Logs,

    /// Generate shell completion script
    ///
    /// Examples:
    ///   hofetch completions bash > hofetch.bash
    ///   hofetch completions zsh > _hofetch
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Runs the application based on command-line arguments.
///
/// # Errors
/// - If logging initialization or setup fails
/// - If command execution fails
pub fn run() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Commands that need neither logging nor a config file
    match &cli.command {
        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "hofetch", &mut io::stdout());
            return Ok(());
        }
        Commands::Logs => return commands::handle_logs(),
        _ => {}
    }

    logging::init_logging()?;

    // Errors from here on also reach the log file
    log_failure(setup::check_and_run_setup().and_then(|()| dispatch(cli.command)))
}

/// Records a failed command in the log before it is reported on stderr.
fn log_failure(result: Result<(), anyhow::Error>) -> Result<(), anyhow::Error> {
    if let Err(e) = &result {
        tracing::error!("Command failed: {e:#}");
    }
    result
}

/// Routes a command that needs logging and a config file to its handler.
fn dispatch(command: Commands) -> Result<(), anyhow::Error> {
    match command {
        Commands::Scrub {
            duration,
            current,
            degrees,
            settings,
            angles,
        } => commands::handle_scrub(duration, current, settings.overrides(), &angles, degrees)?,
        Commands::Seek {
            duration,
            current,
            forward,
            back: _,
            step,
        } => {
            let direction = if forward {
                AdjustDirection::Increment
            } else {
                AdjustDirection::Decrement
            };
            commands::handle_seek(duration, current, direction, step)?;
        }
        Commands::Convert {
            angle,
            degrees,
            no_dead_zone,
            settings,
        } => commands::handle_convert(angle, degrees, settings.overrides(), no_dead_zone)?,
        Commands::Config { reset } => commands::handle_config(reset)?,
        Commands::Completions { .. } | Commands::Logs => {
            unreachable!("These commands are handled earlier")
        }
    }

    Ok(())
}
