use std::io;

use clap::Parser;

#[derive(Parser)]
#[command(name = "shadevec")]
#[command(version, about = "Convert hex color codes to vec3 literals", long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    // No arguments beyond --help/--version; the tool is interactive
    Cli::parse();
    tracing::debug!("starting interactive loop");

    let stdin = io::stdin();
    shadevec::repl::run(stdin.lock(), io::stdout().lock())?;

    Ok(())
}
