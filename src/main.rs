mod assistant;
mod config;
mod consts;
mod data;
mod events;
mod logging;
mod notifications;
mod report;
mod risks;
mod runtime;
mod session;
mod source;
mod ui;
mod widgets;
mod workers;
mod workload;

use crate::config::{Config, get_config_path, is_valid_email};
use crate::consts::cli_consts::mock_latency;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::source::StaticSource;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;
use tokio::time::sleep;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Run without the terminal UI, printing feed events to stdout.
        #[arg(long)]
        headless: bool,

        /// Enable the dashboard background color.
        #[arg(long)]
        with_background: bool,
    },
    /// Sign in and save the session profile
    Login {
        /// Display name for the session
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Email address to sign in with
        #[arg(long, value_name = "EMAIL")]
        email: String,
    },
    /// Clear the session profile and sign out
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            with_background,
        } => start(&config_path, headless, with_background).await,
        Command::Login { name, email } => login(&config_path, name, email).await,
        Command::Logout => {
            println!("Logging out and clearing session profile...");
            Config::clear_session(&config_path).map_err(Into::into)
        }
    }
}

/// Simulated sign-in: no credentials are checked anywhere, the delay
/// stands in for the auth round trip.
async fn login(config_path: &PathBuf, name: String, email: String) -> Result<(), Box<dyn Error>> {
    if !is_valid_email(&email) {
        let err_msg = format!("Invalid email address: {}", email);
        return Err(Box::from(err_msg));
    }

    println!("Signing in as {} <{}>...", name, email);
    sleep(mock_latency::auth_delay()).await;

    let user_id = uuid::Uuid::new_v4().to_string();
    let config = Config::new(user_id, name, email);
    config
        .save(config_path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    println!("Welcome back! Session saved.");
    Ok(())
}

/// Starts the dashboard in TUI or headless mode.
///
/// # Arguments
/// * `config_path` - Location of the saved session profile.
/// * `headless` - Print feed events to stdout instead of the TUI.
/// * `with_background` - Whether to enable background colors.
async fn start(
    config_path: &PathBuf,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let profile = Config::load_from_file(config_path)
        .map_err(|e| format!("Failed to load session: {}. Please login first", e))?;

    let source = StaticSource::new();
    let session = setup_session(profile, &source).await?;

    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}
