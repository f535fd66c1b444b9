use std::process::exit;

use colored::Colorize;

fn main() {
    if let Err(err) = pagewitness::app::run_cli() {
        eprintln!("{} {}", "error:".bold().red(), err);
        exit(1);
    }
}
