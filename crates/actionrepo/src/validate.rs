use crate::prelude::{println, *};
use actionrepo_core::validate::{validate_name, ValidationError};
use colored::Colorize;
use std::process::ExitCode;

#[derive(Debug, clap::Parser)]
#[command(name = "validate")]
#[command(about = "Check whether a name is acceptable")]
pub struct App {
    /// Name to check
    #[arg(value_name = "INPUT")]
    input: String,
}

/// Verdict word and exit status for a validation result.
fn verdict(result: &std::result::Result<&str, ValidationError>) -> (&'static str, u8) {
    match result {
        Ok(_) => ("valid", 0),
        Err(_) => ("invalid", 1),
    }
}

pub fn run(app: App, global: crate::Global) -> Result<ExitCode> {
    let result = validate_name(&app.input);
    let (word, status) = verdict(&result);

    match &result {
        Ok(_) => println!("{}", word.green()),
        Err(e) => {
            println!("{}", word.red());
            if global.verbose {
                println!("{}", Error::from(e.clone()));
            }
        }
    }

    Ok(ExitCode::from(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_valid() {
        assert_eq!(verdict(&validate_name("Mary_Jane")), ("valid", 0));
    }

    #[test]
    fn test_verdict_invalid() {
        assert_eq!(verdict(&validate_name("Bob$Jones")), ("invalid", 1));
        assert_eq!(verdict(&validate_name("")), ("invalid", 1));
    }
}
