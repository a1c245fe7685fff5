use crate::prelude::{println, *};
use actionrepo_core::report::{format_message, log_event};
use std::io;

#[derive(Debug, clap::Args)]
pub struct LogOptions {
    /// Event type, printed upper-cased (e.g. push, pull_request, merge)
    #[arg(value_name = "EVENT_TYPE")]
    event_type: String,

    /// Message to log
    #[arg(value_name = "MESSAGE")]
    message: String,
}

#[derive(Debug, clap::Args)]
pub struct MessageOptions {
    /// Message body
    #[arg(value_name = "MESSAGE")]
    message: String,

    /// Author shown before the message
    #[arg(short, long, env = "ACTIONREPO_AUTHOR")]
    author: Option<String>,
}

pub fn run_log(options: LogOptions, global: crate::Global) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let entry =
        log_event(&mut stdout, &options.event_type, &options.message).map_err(Error::LogWrite)?;

    if global.verbose {
        log::info!("Logged {} bytes", entry.len());
    }

    Ok(())
}

pub fn run_message(options: MessageOptions, _global: crate::Global) -> Result<()> {
    println!(
        "{}",
        format_message(&options.message, options.author.as_deref())
    );
    Ok(())
}
