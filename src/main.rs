use clap::Parser;
use wfinit::{AppError, Options};

#[derive(Parser)]
#[command(name = "wfinit")]
#[command(version)]
#[command(
    about = "Bootstrap a workflow checkout: Conda environment and working directories",
    long_about = None
)]
struct Cli {
    /// Print log messages to stderr.
    #[arg(long)]
    debug: bool,

    /// Only create a Conda environment for development purposes
    /// (no working directory hierarchy).
    #[arg(long)]
    dev_only: bool,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> =
        wfinit::run(Options { debug: cli.debug, dev_only: cli.dev_only });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
