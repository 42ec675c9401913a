// src/bin/cli.rs
use wiki_item::{cli, log};

fn main() {
    let _ = color_eyre::install();
    log::init();
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
