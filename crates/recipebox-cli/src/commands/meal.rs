//! Random-meal rendering
//!
//! Usage: recipebox meal show <PATH|->
//!
//! Renders a saved random-meal API response; `-` reads it from stdin.

use clap::{Args, Subcommand};
use recipebox_core::meal::parse_meal_response;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MealArgs {
    #[command(subcommand)]
    pub command: MealCommand,
}

#[derive(Debug, Subcommand)]
pub enum MealCommand {
    /// Print the first meal of a response
    Show {
        /// JSON file, or `-` for stdin
        source: PathBuf,
    },
}

/// Execute meal command
pub fn execute(args: MealArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        MealCommand::Show { source } => {
            let body = if source.as_os_str() == "-" {
                let mut body = String::new();
                std::io::stdin().read_to_string(&mut body)?;
                body
            } else {
                std::fs::read_to_string(&source)?
            };

            let response = parse_meal_response(&body)?;
            let Some(meal) = response.first() else {
                println!("No meal in response");
                return Ok(());
            };

            println!("{} (#{})", meal.name, meal.id);
            if !meal.category.is_empty() || !meal.area.is_empty() {
                println!("{} / {}", meal.category, meal.area);
            }
            if !meal.tags.is_empty() {
                println!("Tags: {}", meal.tags.join(", "));
            }
            println!();
            println!("Ingredients:");
            for line in meal.ingredient_lines() {
                println!("  - {}", line);
            }
            if !meal.instructions.is_empty() {
                println!();
                println!("{}", meal.instructions.trim());
            }
            if let Some(youtube) = &meal.youtube {
                println!();
                println!("Video: {}", youtube);
            }
        }
    }
    Ok(())
}
