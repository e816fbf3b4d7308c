mod commands;
mod delivery;
mod input;
mod render;

use std::path::{Path, PathBuf};

use anyhow::Result;
use artcal_core::{EncoderConfig, EventEncoder};
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "artcal")]
#[command(about = "Turn art-workshop bookings into calendar links and .ics files")]
struct Cli {
    /// Config file to use instead of ~/.config/artcal/config.toml
    #[arg(long = "config", global = true)]
    config_file: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Google Calendar link for a booking
    Link {
        /// Booking JSON file ("-" or omitted reads stdin)
        booking: Option<PathBuf>,
    },
    /// Write the .ics file for a booking
    Ics {
        /// Booking JSON file ("-" or omitted reads stdin)
        booking: Option<PathBuf>,

        /// Directory to save into (defaults to download_dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the file instead of saving it
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Deliver a booking: .ics file on mobile, browser link on desktop
    Open {
        /// Booking JSON file ("-" or omitted reads stdin)
        booking: Option<PathBuf>,

        /// User agent used to pick the device class
        #[arg(long, conflicts_with = "mobile")]
        user_agent: Option<String>,

        /// Treat the device as mobile
        #[arg(long)]
        mobile: bool,

        /// Directory to save .ics files into (defaults to download_dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print whether a user agent counts as mobile or desktop
    Classify { user_agent: String },
    /// Show what an .ics file or calendar link contains
    Inspect {
        /// Path to an .ics file, or a calendar link
        target: String,
    },
    /// Show config path and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Commands::Link { booking } => {
            let encoder = load_encoder(cli.config_file.as_deref())?;
            commands::link::run(&encoder, booking.as_deref())
        }
        Commands::Ics {
            booking,
            output,
            stdout,
        } => {
            let encoder = load_encoder(cli.config_file.as_deref())?;
            commands::ics::run(&encoder, booking.as_deref(), output, stdout)
        }
        Commands::Open {
            booking,
            user_agent,
            mobile,
            output,
        } => {
            let encoder = load_encoder(cli.config_file.as_deref())?;
            commands::open::run(&encoder, booking.as_deref(), user_agent.as_deref(), mobile, output)
        }
        Commands::Classify { user_agent } => {
            let encoder = load_encoder(cli.config_file.as_deref())?;
            commands::classify::run(&encoder, &user_agent)
        }
        Commands::Inspect { target } => commands::inspect::run(&target),
        Commands::Config => commands::config::run(cli.config_file.as_deref()),
    }
}

fn load_encoder(config_path: Option<&Path>) -> Result<EventEncoder> {
    let config = match config_path {
        Some(path) => EncoderConfig::load_from(path)?,
        None => EncoderConfig::load()?,
    };

    Ok(EventEncoder::new(config))
}
