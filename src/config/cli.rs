use clap::Parser;

/// Diagnostics flags only; the intensity factor is read from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "carbon-calculator")]
#[command(about = "Reads {\"kwh\": n} on stdin and writes the carbon score as JSON on stdout")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose logging on stderr")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
