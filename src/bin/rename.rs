use dotenv::dotenv;
use modkit::cli::{self, Invocation};
use modkit::logging;
use std::process;
use tracing::error;

fn main() {
    // Load MODKIT_* overrides from .env
    dotenv().ok();

    let invocation = cli::invocation_or_exit(cli::build_cli(
        "modkit-rename",
        "Replace the Go module path in go.mod and every .go file",
    ));
    logging::init_cli_logger(invocation.verbose);

    if let Err(e) = run(&invocation) {
        error!(error = %e, "rename aborted");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(invocation: &Invocation) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    cli::commands::rename::handle_rename(invocation, &root)?;
    Ok(())
}
