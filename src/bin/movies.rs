use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::{ArgAction, Parser};
use log::{error, info, LevelFilter};

use movies::{default_seed, load_seed, Dispatcher, MovieCollection, MovieError, Result};

const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again later.";

#[derive(Parser)]
#[command(name = "movies", version, about = "A text-menu movie collection manager")]
struct Cli {
    /// Load the starting movies from a JSON file instead of the built-in examples
    #[arg(long, value_name = "PATH", conflicts_with = "empty")]
    seed_file: Option<PathBuf>,

    /// Start with an empty collection
    #[arg(long)]
    empty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(log_level(cli.verbose))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(cli) {
        match e {
            MovieError::InvalidArgument { .. } => println!("{}", e),
            _ => {
                error!("{}", e);
                println!("{}", UNEXPECTED_ERROR);
            }
        }
        exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("movies {}", env!("CARGO_PKG_VERSION"));

    let collection = if cli.empty {
        MovieCollection::new()
    } else if let Some(path) = cli.seed_file {
        info!("Seeding from {}", path.display());
        MovieCollection::from_seed(load_seed(&path)?)?
    } else {
        MovieCollection::from_seed(default_seed()?)?
    };

    let mut dispatcher = Dispatcher::new(collection, io::stdin().lock(), io::stdout());
    dispatcher.run()
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
