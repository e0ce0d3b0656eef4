// src/bin/cli.rs
use ccf_ddl::cli;

fn main() {
    if let Err(e) = color_eyre::install().and_then(|()| cli::run()) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}
