//! Command-line splitter for UTF-8 byte strings

use clap::Parser;
use kireji_cli::commands::SplitArgs;

/// Split UTF-8 byte strings on byte, sequence, or set delimiters
#[derive(Debug, Parser)]
#[command(name = "kireji", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: SplitArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.args.execute() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
