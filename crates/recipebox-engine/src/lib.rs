//! RecipeBox Engine - async repository layer
//!
//! Exposes [`RecipeRepository`], an explicitly owned handle over one SQLite
//! connection. Every operation runs its storage work on tokio's blocking
//! pool and logs its lifecycle with a per-call request id.

pub mod repository;
mod worker;

pub use recipebox_store::seed::SeedImportOutcome;
pub use repository::RecipeRepository;
