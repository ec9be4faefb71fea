//! CLI frontend for the Skald skill check engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use skald_mechanics::RollMode;
use skald_solo::CharacterClass;

use commands::check::Output;

#[derive(Parser)]
#[command(
    name = "skald",
    about = "Skald: d20 skill checks for AI-narrated adventures",
    version,
    propagate_version = true
)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which check, if any, an action calls for
    Detect {
        /// The player's action text
        action: String,
    },

    /// Detect and roll the check for an action
    Check {
        /// The player's action text
        action: String,

        #[command(flatten)]
        character: CharacterArgs,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Roll two dice and keep the higher
        #[arg(long)]
        advantage: bool,

        /// Roll two dice and keep the lower
        #[arg(long)]
        disadvantage: bool,

        /// Print the narrative payload as JSON
        #[arg(long, conflicts_with = "prompt")]
        json: bool,

        /// Print the full narrator prompt, roll policy included
        #[arg(long)]
        prompt: bool,
    },

    /// Roll bare d20s
    Roll {
        /// Roll two dice and keep the higher
        #[arg(long, conflicts_with = "disadvantage")]
        advantage: bool,

        /// Roll two dice and keep the lower
        #[arg(long)]
        disadvantage: bool,

        /// Number of rolls
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the ability modifier for each score
    Modifier {
        /// Ability scores
        #[arg(required = true, allow_negative_numbers = true)]
        scores: Vec<i32>,
    },

    /// List every skill with its governing ability
    Skills,

    /// Start an interactive solo session
    Solo {
        /// RNG seed for reproducible rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Class preset for the character
        #[arg(short, long, default_value = "fighter")]
        class: CharacterClass,

        /// Character name
        #[arg(short, long, default_value = "Adventurer")]
        name: String,
    },
}

/// Where the rolling character's stats come from.
#[derive(Args)]
struct CharacterArgs {
    /// Class preset supplying the stats
    #[arg(short, long, default_value = "fighter", conflicts_with = "stats_file")]
    class: CharacterClass,

    /// JSON file with explicit ability scores
    #[arg(long)]
    stats_file: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "skald=debug,skald_mechanics=debug,skald_solo=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Detect { action } => commands::detect::run(&action),
        Commands::Check {
            action,
            character,
            seed,
            advantage,
            disadvantage,
            json,
            prompt,
        } => commands::check::run(
            &action,
            &character,
            seed,
            RollMode::from_flags(advantage, disadvantage),
            Output::from_flags(json, prompt),
        ),
        Commands::Roll {
            advantage,
            disadvantage,
            count,
            seed,
        } => commands::roll::run(advantage, disadvantage, count, seed),
        Commands::Modifier { scores } => commands::modifier::run(&scores),
        Commands::Skills => commands::skills::run(),
        Commands::Solo { seed, class, name } => commands::solo::run(seed, class, &name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
