// Integration tests for seed parsing and import

use recipebox_core::errors::RbErrorKind;
use recipebox_store::db::open_in_memory;
use recipebox_store::seed::{self, provenance, SeedImportOutcome};
use recipebox_store::SqliteRepo;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_parse_minimal_seed() {
    // Given: A minimal valid seed file
    let path = fixtures_dir().join("seed_minimal.yaml");

    // When: We parse it
    let result = seed::parse_seed_file(&path);

    // Then: Parsing succeeds
    assert!(result.is_ok(), "Should parse minimal seed: {:?}", result.err());
    let parsed = result.unwrap();
    assert_eq!(parsed.catalog.name, "minimal");
    assert_eq!(parsed.recipes[0].ingredients.len(), 4);
}

#[test]
fn test_parse_rejects_invalid_seeds() {
    for (file, needle) in [
        ("seed_duplicate_recipe.yaml", "Duplicate recipe name"),
        ("seed_bad_version.yaml", "schema_version: 3"),
        ("seed_blank_name.yaml", "blank name"),
    ] {
        let err = seed::parse_seed_file(&fixtures_dir().join(file)).unwrap_err();
        assert_eq!(err.kind(), RbErrorKind::InvalidSeed, "{file}");
        assert!(err.message().contains(needle), "{file}: {}", err.message());
    }
}

#[test]
fn test_parse_missing_file_is_seed_error() {
    let err = seed::parse_seed_file(&fixtures_dir().join("nope.yaml")).unwrap_err();
    assert_eq!(err.kind(), RbErrorKind::InvalidSeed);
}

#[test]
fn test_import_reuses_ingredients_across_recipes() {
    // Given: A catalog spelling flour two ways
    let mut conn = open_in_memory().unwrap();
    let path = fixtures_dir().join("seed_baking.yaml");

    // When: It is imported
    let outcome = seed::import_seed(&path, &mut conn).unwrap();

    // Then: Both recipes share one flour row
    assert!(matches!(outcome, SeedImportOutcome::Applied { recipes: 2, .. }));
    let ingredients = SqliteRepo::get_all_ingredients(&conn).unwrap();
    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Flour", "milk", "Eggs", "Butter", "Sugar"]);
}

#[test]
fn test_reimport_is_noop_and_recorded_once() {
    // Given: A catalog already imported
    let mut conn = open_in_memory().unwrap();
    let path = fixtures_dir().join("seed_minimal.yaml");
    let first = seed::import_seed(&path, &mut conn).unwrap();

    // When: It is imported again
    let second = seed::import_seed(&path, &mut conn).unwrap();

    // Then: Nothing new is written
    assert_eq!(
        second,
        SeedImportOutcome::AlreadyApplied {
            digest: first.digest().to_string()
        }
    );
    assert_eq!(SqliteRepo::get_all_recipes_with_ingredients(&conn).unwrap().len(), 1);
    assert_eq!(provenance::list_imports(&conn).unwrap().len(), 1);
}

#[test]
fn test_sample_catalog_contents() {
    // Given: An empty store
    let mut conn = open_in_memory().unwrap();

    // When: The built-in sample catalog is imported
    seed::import_sample_catalog(&mut conn).unwrap();

    // Then: 30 recipes share 59 distinct ingredients
    assert_eq!(SqliteRepo::get_all_recipes_with_ingredients(&conn).unwrap().len(), 30);
    assert_eq!(SqliteRepo::get_all_ingredients(&conn).unwrap().len(), 59);

    // And: 11 recipes use both flour and eggs
    let both = SqliteRepo::filter_recipes_by_ingredients(&conn, &["Mouka", "Vejce"], 2).unwrap();
    assert_eq!(both.len(), 11);
}
