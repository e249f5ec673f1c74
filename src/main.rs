use clap::Parser;
use dodo::cli::commands::Cli;
use dodo::cli::handlers;
use dodo::logging;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = logging::init_file(&cli.data_dir) {
                eprintln!("warning: could not open log file: {}", e);
            }
            dodo::tui::run(&cli.data_dir)
        }
        Some(_) => {
            logging::init_stderr();
            handlers::dispatch(cli)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
