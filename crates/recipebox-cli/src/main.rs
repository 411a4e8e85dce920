//! RecipeBox CLI
//!
//! Command-line interface for the recipe store

use clap::{Parser, Subcommand};
use recipebox_core::logging_facility::{self, Profile};
use recipebox_engine::RecipeRepository;

mod commands;
mod config;

use config::{Config, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "recipebox")]
#[command(about = "RecipeBox - Recipes, ingredients and the links between them", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Recipe operations
    Recipe(commands::recipe::RecipeArgs),
    /// Ingredient operations
    Ingredient(commands::ingredient::IngredientArgs),
    /// Seed catalog import
    Seed(commands::seed::SeedArgs),
    /// Random-meal payload rendering
    Meal(commands::meal::MealArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config;

    logging_facility::init(match config.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    // Meal rendering never touches the store, so the store opens lazily
    let open = || {
        tracing::debug!(db = %config.db_path.display(), "opening store");
        RecipeRepository::open(&config.db_path)
    };

    match cli.command {
        Commands::Recipe(args) => commands::recipe::execute(args, &open()?).await,
        Commands::Ingredient(args) => commands::ingredient::execute(args, &open()?).await,
        Commands::Seed(args) => commands::seed::execute(args, &open()?).await,
        Commands::Meal(args) => commands::meal::execute(args),
    }
}
