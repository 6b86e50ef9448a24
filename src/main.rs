use boggle_search::app::{run_app, Cli};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run_app(cli)?;
    Ok(())
}
