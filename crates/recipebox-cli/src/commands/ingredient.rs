//! Ingredient commands
//!
//! Usage: recipebox ingredient list

use clap::{Args, Subcommand};
use recipebox_engine::RecipeRepository;

#[derive(Debug, Args)]
pub struct IngredientArgs {
    #[command(subcommand)]
    pub command: IngredientCommand,
}

#[derive(Debug, Subcommand)]
pub enum IngredientCommand {
    /// List ingredients, one per case-insensitive name
    List,
}

/// Execute ingredient command
pub async fn execute(args: IngredientArgs, repo: &RecipeRepository) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        IngredientCommand::List => {
            for ingredient in repo.get_all_ingredients().await? {
                println!("{}\t{}", ingredient.ingredient_id, ingredient.name);
            }
        }
    }
    Ok(())
}
