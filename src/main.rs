use clap::Parser;
use spotcheck::cli::commands::Cli;
use spotcheck::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch the TUI
            let store_dir = handlers::resolve_store_dir(cli.store_dir);
            if let Err(e) = spotcheck::tui::run(store_dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
