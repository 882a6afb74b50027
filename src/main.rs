use dotenv::dotenv;
use modkit::cli::{self, Invocation};
use modkit::logging;
use std::process;
use tracing::error;

fn main() {
    // Load MODKIT_* overrides from .env
    dotenv().ok();

    let invocation = cli::invocation_or_exit(cli::build_cli(
        "modkit-init",
        "Scaffold a Go backend project and set its module path",
    ));
    logging::init_cli_logger(invocation.verbose);

    if let Err(e) = run(&invocation) {
        error!(error = %e, "initialization aborted");
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(invocation: &Invocation) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    cli::commands::init::handle_init(invocation, &root)?;
    Ok(())
}
