//! Recipe commands
//!
//! Usage:
//!   recipebox recipe add <NAME> [--description D] [--ingredient I]...
//!   recipebox recipe update <ID> <NAME> [--description D] [--ingredient I]...
//!   recipebox recipe show <ID>
//!   recipebox recipe delete <ID>
//!   recipebox recipe list [--ingredient I]... [--query Q]

use clap::{Args, Subcommand};
use recipebox_core::errors::RecipeBoxError;
use recipebox_core::model::Recipe;
use recipebox_engine::RecipeRepository;

#[derive(Debug, Args)]
pub struct RecipeArgs {
    #[command(subcommand)]
    pub command: RecipeCommand,
}

#[derive(Debug, Subcommand)]
pub enum RecipeCommand {
    /// Add a recipe
    Add(EditArgs),
    /// Replace a recipe's fields and ingredient list
    Update {
        id: i64,
        #[command(flatten)]
        edit: EditArgs,
    },
    /// Show a recipe with its ingredients
    Show { id: i64 },
    /// Delete a recipe
    Delete { id: i64 },
    /// List recipes, optionally filtered by ingredients and/or a name query
    List(ListArgs),
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Recipe name
    pub name: String,

    /// Free-text description
    #[arg(long, short, default_value = "")]
    pub description: String,

    /// Ingredient name (repeatable)
    #[arg(long = "ingredient", short = 'i')]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only recipes containing this ingredient (repeatable, all must match)
    #[arg(long = "ingredient", short = 'i')]
    pub ingredients: Vec<String>,

    /// Only recipes whose name contains this text
    #[arg(long, short)]
    pub query: Option<String>,
}

/// Execute recipe command
pub async fn execute(args: RecipeArgs, repo: &RecipeRepository) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        RecipeCommand::Add(edit) => {
            let id = repo
                .insert_recipe(Recipe::new(edit.name, edit.description), edit.ingredients)
                .await?;
            println!("✓ Added recipe {}", id);
        }
        RecipeCommand::Update { id, edit } => {
            let updated = repo
                .update_recipe(Recipe::with_id(id, edit.name, edit.description), edit.ingredients)
                .await?;
            if !updated {
                return Err(RecipeBoxError::RecipeNotFound { recipe_id: id }.into());
            }
            println!("✓ Updated recipe {}", id);
        }
        RecipeCommand::Show { id } => match repo.get_recipe_with_ingredients(id).await? {
            Some(joined) => {
                println!("{} (#{})", joined.recipe.name, joined.recipe.recipe_id);
                if !joined.recipe.description.is_empty() {
                    println!("{}", joined.recipe.description);
                }
                for name in joined.ingredient_names() {
                    println!("  - {}", name);
                }
            }
            None => return Err(RecipeBoxError::RecipeNotFound { recipe_id: id }.into()),
        },
        RecipeCommand::Delete { id } => {
            if repo.delete_recipe(id).await? {
                println!("✓ Deleted recipe {}", id);
            } else {
                println!("Recipe {} not found; nothing deleted", id);
            }
        }
        RecipeCommand::List(list) => {
            let mut recipes = repo
                .filter_and_search_recipes(list.ingredients, list.query.as_deref())
                .await?;
            recipes.sort_by_key(|r| r.recipe_id);
            for recipe in recipes {
                println!("{}\t{}", recipe.recipe_id, recipe.name);
            }
        }
    }

    Ok(())
}
