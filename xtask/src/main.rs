use clap::Parser;
use color_eyre::eyre::Result;

mod cli;
mod scripts;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = cli::App::parse();

    match app.command {
        Some(cli::Commands::Ci(args)) => scripts::ci::run(&args),
        None => {
            println!("No command specified. Try `cargo xtask ci`.");
            Ok(())
        }
    }
}
