use crate::prelude::{println, *};
use actionrepo_core::config::AppConfig;
use actionrepo_core::greeting::{
    greeting_lines, welcome_lines, INVALID_INPUT_MESSAGE, NAME_PROMPT, SAMPLE_NUMBERS,
};
use actionrepo_core::validate::{validate_name, ValidationError};
use chrono::{Local, NaiveDate, Utc};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Debug, Default, clap::Parser)]
#[command(name = "greet")]
#[command(about = "Ask for a name, validate it and print a greeting")]
pub struct App {
    /// Name to greet; skips the interactive prompt
    #[arg(short, long, env = "ACTIONREPO_NAME")]
    name: Option<String>,
}

/// Result of validating a name and building its greeting.
#[derive(Debug, PartialEq)]
pub enum GreetOutcome {
    Greeted(Vec<String>),
    Rejected(ValidationError),
}

impl GreetOutcome {
    pub fn lines(&self) -> Vec<String> {
        match self {
            GreetOutcome::Greeted(lines) => lines.clone(),
            GreetOutcome::Rejected(_) => vec![INVALID_INPUT_MESSAGE.to_string()],
        }
    }

    /// 0 when greeted, 1 when the name was rejected.
    pub fn exit_status(&self) -> u8 {
        match self {
            GreetOutcome::Greeted(_) => 0,
            GreetOutcome::Rejected(_) => 1,
        }
    }
}

pub fn greet(config: &AppConfig, input: &str, today: NaiveDate) -> GreetOutcome {
    match validate_name(input) {
        Ok(name) => GreetOutcome::Greeted(greeting_lines(config, name, today, &SAMPLE_NUMBERS)),
        Err(e) => GreetOutcome::Rejected(e),
    }
}

pub fn run(app: App, config: &AppConfig, global: crate::Global) -> Result<ExitCode> {
    for line in welcome_lines(config, Utc::now()) {
        println!("{}", line);
    }

    if global.verbose {
        println!(
            "Environment: {} ({})",
            global.environment,
            config.api_endpoint(global.environment).unwrap_or("-")
        );
    }

    let input = match app.name {
        Some(name) => name,
        None => prompt_name(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let outcome = greet(config, &input, Local::now().date_naive());

    match &outcome {
        GreetOutcome::Greeted(_) => log::info!("Greeting {:?}", input),
        GreetOutcome::Rejected(e) => log::debug!("{}", Error::from(e.clone())),
    }

    for (idx, line) in outcome.lines().iter().enumerate() {
        match (&outcome, idx) {
            (GreetOutcome::Rejected(_), _) => println!("{}", line.red()),
            (GreetOutcome::Greeted(_), 0) => println!("{}", line.green().bold()),
            _ => println!("{}", line),
        }
    }

    Ok(ExitCode::from(outcome.exit_status()))
}

/// Print the prompt and read a single line, without its line terminator.
fn prompt_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{NAME_PROMPT}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read name from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
