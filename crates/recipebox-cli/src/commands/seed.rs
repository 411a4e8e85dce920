//! Seed import commands
//!
//! Usage:
//!   recipebox seed import <PATH>
//!   recipebox seed sample

use clap::{Args, Subcommand};
use recipebox_engine::{RecipeRepository, SeedImportOutcome};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Import a seed file, or every .yaml/.yml file in a directory
    Import(ImportArgs),
    /// Load the built-in sample catalog
    Sample,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Path to seed YAML file or directory
    pub path: PathBuf,
}

/// Execute seed command
pub async fn execute(args: SeedArgs, repo: &RecipeRepository) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SeedCommand::Import(import_args) => execute_import(import_args, repo).await,
        SeedCommand::Sample => {
            println!("Importing built-in sample catalog...");
            report(&repo.insert_sample_data().await?);
            Ok(())
        }
    }
}

async fn execute_import(args: ImportArgs, repo: &RecipeRepository) -> Result<(), Box<dyn std::error::Error>> {
    let seed_files = if args.path.is_dir() {
        // Sorted for determinism
        let mut files: Vec<PathBuf> = std::fs::read_dir(&args.path)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
            })
            .collect();
        files.sort();
        files
    } else {
        vec![args.path]
    };

    for seed_file in seed_files {
        println!("Importing {}...", seed_file.display());
        let outcome = repo.import_seed_file(seed_file).await?;
        report(&outcome);
    }

    Ok(())
}

fn report(outcome: &SeedImportOutcome) {
    match outcome {
        SeedImportOutcome::Applied { digest, recipes } => {
            println!("✓ Imported {} recipes (digest: {})", recipes, digest)
        }
        SeedImportOutcome::AlreadyApplied { digest } => {
            println!("= Already imported (digest: {})", digest)
        }
    }
}
