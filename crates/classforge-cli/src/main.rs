//! Classforge CLI - Generate class skeletons from UML class diagram scripts

mod cli;
mod script;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();
    let mut app = cli::ClassforgeApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
