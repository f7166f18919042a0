// reelcut-cli/src/main.rs
//
// Entry point of the `reelcut` binary: parses arguments, installs logging,
// dispatches to the requested command and maps errors to exit status 1.

use std::process;

use clap::Parser;
use reelcut_cli::error::render_error;
use reelcut_cli::logging::init_logging;
use reelcut_cli::{Cli, Commands, run_check, run_process};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Process(args) => run_process(args),
        Commands::Check(tools) => run_check(&tools),
    };

    if let Err(e) = result {
        log::debug!("Exiting after error: {:?}", e);
        eprintln!("{}", render_error(&e));
        process::exit(1);
    }
}
