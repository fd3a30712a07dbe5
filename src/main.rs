use clap::Parser;

use ipurge::cli::{Args, run};
use ipurge::logging::init_logging;

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
