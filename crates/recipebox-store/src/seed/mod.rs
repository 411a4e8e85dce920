//! Seed catalog import
//!
//! Provides:
//! - Seed Format v0 schema
//! - YAML parser with validation
//! - Digest canonicalization
//! - Importer orchestration (including the built-in sample catalog)
//! - Import provenance (`seed_imports`)

pub mod digest;
pub mod format_v0;
pub mod importer;
pub mod parser;
pub mod provenance;

pub use digest::compute_seed_digest;
pub use format_v0::SeedV0;
pub use importer::{import_sample_catalog, import_seed, import_seed_str, SeedImportOutcome};
pub use parser::{parse_seed_file, parse_seed_str};
pub use provenance::SeedImportRecord;
