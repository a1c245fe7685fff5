use crate::cli::CiArgs;
use chrono::{DateTime, Utc};
use color_eyre::eyre::Result;
use duct::cmd;
use std::fs;
use std::io::Write;

// ---------------------------------------------------------------------------
// Functional Core
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Fmt,
    Clippy,
    Test,
}

/// Steps in the order CI runs them.
const PIPELINE: [Step; 3] = [Step::Fmt, Step::Clippy, Step::Test];

impl Step {
    fn args(self, fix: bool) -> Vec<&'static str> {
        match (self, fix) {
            (Step::Fmt, false) => vec!["fmt", "--all", "--check"],
            (Step::Fmt, true) => vec!["fmt", "--all"],
            (Step::Clippy, false) => {
                vec!["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"]
            }
            (Step::Clippy, true) => vec![
                "clippy",
                "--workspace",
                "--all-targets",
                "--fix",
                "--allow-dirty",
                "--",
                "-D",
                "warnings",
            ],
            (Step::Test, _) => vec!["test", "--workspace"],
        }
    }

    fn skipped(self, args: &CiArgs) -> bool {
        match self {
            Step::Fmt => args.no_fmt,
            Step::Clippy => args.no_clippy,
            Step::Test => args.no_test,
        }
    }
}

fn display_name(args: &[&str]) -> String {
    format!("cargo {}", args.join(" "))
}

struct StepResult {
    name: String,
    passed: bool,
    output: String,
}

fn format_log_entry(result: &StepResult, finished_at: DateTime<Utc>) -> String {
    let status = if result.passed { "ok" } else { "FAILED" };
    format!(
        "=== {} [{}] {} ===\n{}\n",
        result.name,
        status,
        finished_at.format("%Y-%m-%d %H:%M:%S UTC"),
        result.output
    )
}

// ---------------------------------------------------------------------------
// Imperative Shell
// ---------------------------------------------------------------------------

pub fn run(args: &CiArgs) -> Result<()> {
    let log_path = std::env::current_dir()?.join("target").join("xtask-ci.log");
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut log_file = fs::File::create(&log_path)?;

    for step in PIPELINE {
        if step.skipped(args) {
            continue;
        }

        let step_args = step.args(args.fix);
        let name = display_name(&step_args);
        println!("==> {name}");

        let output = cmd("cargo", &step_args)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()?;

        let result = StepResult {
            name,
            passed: output.status.success(),
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
        };

        write!(log_file, "{}", format_log_entry(&result, Utc::now()))?;

        if !result.passed {
            print!("{}", result.output);
            println!("\nci failed at: {}", result.name);
            println!("log: {}", log_path.display());
            drop(log_file);
            std::process::exit(1);
        }

        if args.verbose {
            print!("{}", result.output);
        }
    }

    println!("log: {}", log_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fmt_checks_unless_fixing() {
        assert!(Step::Fmt.args(false).contains(&"--check"));
        assert!(!Step::Fmt.args(true).contains(&"--check"));
    }

    #[test]
    fn test_clippy_fix_keeps_deny_warnings() {
        let args = Step::Clippy.args(true);
        assert!(args.contains(&"--fix"));
        assert!(args.contains(&"--allow-dirty"));
        assert_eq!(&args[args.len() - 2..], &["-D", "warnings"]);
    }

    #[test]
    fn test_test_step_ignores_fix() {
        assert_eq!(Step::Test.args(true), Step::Test.args(false));
    }

    #[test]
    fn test_skip_flags() {
        let args = CiArgs {
            no_clippy: true,
            ..Default::default()
        };
        assert!(!Step::Fmt.skipped(&args));
        assert!(Step::Clippy.skipped(&args));
        assert!(!Step::Test.skipped(&args));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(&["test", "--workspace"]), "cargo test --workspace");
    }

    #[test]
    fn test_format_log_entry() {
        let finished = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let result = StepResult {
            name: "cargo test --workspace".to_string(),
            passed: false,
            output: "test failed\n".to_string(),
        };

        assert_eq!(
            format_log_entry(&result, finished),
            "=== cargo test --workspace [FAILED] 2025-01-01 12:00:00 UTC ===\ntest failed\n\n"
        );
    }
}
