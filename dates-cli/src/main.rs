mod cli;
mod exit_codes;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Quiet unless RUST_LOG asks for more; a clean run prints nothing.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let code = match cli.run() {
        Ok(_) => exit_codes::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}
