use carbon_calculator::core::invocation::invoke_reader;
use carbon_calculator::utils::logger;
use carbon_calculator::{CliConfig, EnvConfig};
use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = EnvConfig::from_env();
    tracing::debug!("config: {:?}", config);

    let response = invoke_reader(&config, std::io::stdin().lock());

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", response)?;
    stdout.flush()?;

    Ok(())
}
