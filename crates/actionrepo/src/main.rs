use crate::prelude::*;
use actionrepo_core::config::{AppConfig, Environment};
use clap::Parser;
use std::process::ExitCode;

mod config;
mod error;
mod event;
mod greet;
mod prelude;
mod stats;
mod upper;
mod validate;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Sample application for testing GitHub webhooks"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Environment whose API endpoint is shown
    #[clap(
        long,
        env = "ACTIONREPO_ENV",
        global = true,
        default_value = "development",
        value_parser = parse_environment
    )]
    environment: Environment,

    /// Whether to display additional information.
    #[clap(long, env = "ACTIONREPO_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

fn parse_environment(s: &str) -> std::result::Result<Environment, String> {
    s.parse().map_err(|e: actionrepo_core::config::ConfigError| e.to_string())
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Ask for a name, validate it and print a greeting (default)
    Greet(crate::greet::App),

    /// Check whether a name is acceptable
    Validate(crate::validate::App),

    /// Summarize a list of numbers
    Stats(crate::stats::App),

    /// Upper-case a value or a list of values
    Upper(crate::upper::App),

    /// Print a timestamped event log line
    Log(crate::event::LogOptions),

    /// Format a message with timestamp and author
    Message(crate::event::MessageOptions),

    /// Show the static configuration table
    Config(crate::config::App),
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let config = AppConfig::default();

    log::debug!(
        "Starting {} v{} ({})",
        config.app.name,
        config.app.version,
        app.global.environment
    );

    let unit = |r: Result<()>| r.map(|()| ExitCode::SUCCESS);

    match app.command.unwrap_or_default() {
        SubCommands::Greet(sub_app) => crate::greet::run(sub_app, &config, app.global),
        SubCommands::Validate(sub_app) => crate::validate::run(sub_app, app.global),
        SubCommands::Stats(sub_app) => unit(crate::stats::run(sub_app, app.global)),
        SubCommands::Upper(sub_app) => unit(crate::upper::run(sub_app, app.global)),
        SubCommands::Log(options) => unit(crate::event::run_log(options, app.global)),
        SubCommands::Message(options) => unit(crate::event::run_message(options, app.global)),
        SubCommands::Config(sub_app) => unit(crate::config::run(sub_app, &config, app.global)),
    }
}

impl Default for SubCommands {
    fn default() -> Self {
        SubCommands::Greet(crate::greet::App::default())
    }
}
