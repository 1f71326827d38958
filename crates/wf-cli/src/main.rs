//! CLI frontend for the Wayfarer adventure engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wf",
    about = "Wayfarer: explore procedurally generated missions one room at a time",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive play session
    Play {
        /// RNG seed for reproducible grids and rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Grid width
        #[arg(long)]
        width: Option<usize>,

        /// Grid height
        #[arg(long)]
        height: Option<usize>,

        /// Room population strategy: uniform, sparse
        #[arg(long)]
        strategy: Option<String>,

        /// Place the objective at a random cell with the exit in the far corner
        #[arg(long)]
        random_objective: bool,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Character save file to load
        #[arg(short, long)]
        load: Option<PathBuf>,
    },

    /// Print a generated mission grid
    Map {
        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Grid width
        #[arg(long, default_value = "5")]
        width: usize,

        /// Grid height
        #[arg(long, default_value = "5")]
        height: usize,

        /// Room population strategy: uniform, sparse
        #[arg(long, default_value = "sparse")]
        strategy: String,

        /// Place the objective at a random cell with the exit in the far corner
        #[arg(long)]
        random_objective: bool,
    },

    /// Create a character and write it to a save file
    New {
        /// Character name
        name: String,

        /// Species (e.g. Human, Elf, Dwarf, Orc)
        #[arg(long, default_value = "Human")]
        species: String,

        /// Use the standard skills instead of rolling them
        #[arg(long)]
        standard: bool,

        /// RNG seed for skill rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Save file path (default: `<name>.json`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a saved character
    Sheet {
        /// Save file path
        save: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            width,
            height,
            strategy,
            random_objective,
            config,
            load,
        } => commands::play::run(&commands::play::PlayOptions {
            seed,
            width,
            height,
            strategy,
            random_objective,
            config,
            load,
        }),
        Commands::Map {
            seed,
            width,
            height,
            strategy,
            random_objective,
        } => commands::map::run(seed, width, height, &strategy, random_objective),
        Commands::New {
            name,
            species,
            standard,
            seed,
            output,
        } => commands::new::run(&name, &species, standard, seed, output.as_deref()),
        Commands::Sheet { save } => commands::sheet::run(&save),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
