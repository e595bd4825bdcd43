use anyhow::Result;
use epoch_datetime::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Resolve mode and epoch; usage problems print the help text
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) if err.is_usage() => cli::exit_with_usage(&err.to_string()),
        Err(err) => return Err(err.into()),
    };

    cli::execute(&config)
}
