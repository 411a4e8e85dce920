// Integration tests for transactional recipe writes

use recipebox_core::model::Recipe;
use recipebox_store::db::open_in_memory;
use recipebox_store::repo::{
    delete_recipe_cascade, insert_recipe_with_ingredients, update_recipe_with_ingredients,
};
use recipebox_store::SqliteRepo;

#[test]
fn test_insert_reuses_ingredient_ignoring_case() {
    // Given: A recipe using "Flour"
    let mut conn = open_in_memory().unwrap();
    let cake =
        insert_recipe_with_ingredients(&mut conn, &Recipe::new("Cake", ""), &["Flour", "Sugar"])
            .unwrap();

    // When: Another recipe uses "flour"
    let bread =
        insert_recipe_with_ingredients(&mut conn, &Recipe::new("Bread", ""), &["flour", "Water"])
            .unwrap();

    // Then: Both link to the same row, which keeps its original spelling
    let cake_links = SqliteRepo::list_links_for_recipe(&conn, cake).unwrap();
    let bread_links = SqliteRepo::list_links_for_recipe(&conn, bread).unwrap();
    assert_eq!(cake_links[0].ingredient_id, bread_links[0].ingredient_id);

    let ingredients = SqliteRepo::get_all_ingredients(&conn).unwrap();
    assert_eq!(ingredients.len(), 3);
    assert!(ingredients.iter().any(|i| i.name == "Flour"));
    assert!(!ingredients.iter().any(|i| i.name == "flour"));
}

#[test]
fn test_insert_reuses_non_ascii_case_variant() {
    let mut conn = open_in_memory().unwrap();
    insert_recipe_with_ingredients(&mut conn, &Recipe::new("A", ""), &["Řapíkatý celer"]).unwrap();
    insert_recipe_with_ingredients(&mut conn, &Recipe::new("B", ""), &["řapíkatý CELER"]).unwrap();

    assert_eq!(SqliteRepo::get_all_ingredients(&conn).unwrap().len(), 1);
}

#[test]
fn test_update_replaces_ingredient_list() {
    // Given: A recipe with three ingredients
    let mut conn = open_in_memory().unwrap();
    let id = insert_recipe_with_ingredients(
        &mut conn,
        &Recipe::new("Palačinky", "v1"),
        &["Mouka", "Vejce", "Mléko"],
    )
    .unwrap();

    // When: It is updated with a different list
    let updated = update_recipe_with_ingredients(
        &mut conn,
        &Recipe::with_id(id, "Palačinky", "v2"),
        &["Mouka", "Voda"],
    )
    .unwrap();

    // Then: Exactly the new list is linked, in input order
    assert!(updated);
    let joined = SqliteRepo::get_recipe_with_ingredients(&conn, id).unwrap().unwrap();
    assert_eq!(joined.recipe.description, "v2");
    assert_eq!(joined.ingredient_names(), vec!["Mouka", "Voda"]);

    // And: Unlinked ingredient rows remain
    assert_eq!(SqliteRepo::get_all_ingredients(&conn).unwrap().len(), 4);
}

#[test]
fn test_insert_with_existing_id_replaces_links() {
    // Given: A stored recipe with two ingredients
    let mut conn = open_in_memory().unwrap();
    let id = insert_recipe_with_ingredients(&mut conn, &Recipe::new("Cake", "v1"), &["Flour", "Sugar"])
        .unwrap();

    // When: The same id is inserted again with one ingredient
    let again =
        insert_recipe_with_ingredients(&mut conn, &Recipe::with_id(id, "Cake", "v2"), &["Milk"])
            .unwrap();

    // Then: The old links are gone, not merged
    assert_eq!(again, id);
    let joined = SqliteRepo::get_recipe_with_ingredients(&conn, id).unwrap().unwrap();
    assert_eq!(joined.recipe.description, "v2");
    assert_eq!(joined.ingredient_names(), vec!["Milk"]);
}

#[test]
fn test_insert_with_unused_explicit_id_creates_row() {
    let mut conn = open_in_memory().unwrap();

    let id = insert_recipe_with_ingredients(&mut conn, &Recipe::with_id(7, "Chléb", ""), &["Mouka"])
        .unwrap();

    assert_eq!(id, 7);
    let joined = SqliteRepo::get_recipe_with_ingredients(&conn, 7).unwrap().unwrap();
    assert_eq!(joined.ingredient_names(), vec!["Mouka"]);
}

#[test]
fn test_delete_cascade_is_idempotent() {
    // Given: A stored recipe with links
    let mut conn = open_in_memory().unwrap();
    let id =
        insert_recipe_with_ingredients(&mut conn, &Recipe::new("Guláš", ""), &["Cibule", "Paprika"])
            .unwrap();

    // When: It is deleted twice
    let first = delete_recipe_cascade(&mut conn, id).unwrap();
    let second = delete_recipe_cascade(&mut conn, id).unwrap();

    // Then: The first call removes it, the second finds nothing
    assert!(first);
    assert!(!second);
    assert!(SqliteRepo::list_links_for_recipe(&conn, id).unwrap().is_empty());
    assert!(SqliteRepo::get_recipe_with_ingredients(&conn, id).unwrap().is_none());
}

#[test]
fn test_failed_insert_rolls_back() {
    // Given: A store where the link table has been made unusable
    let mut conn = open_in_memory().unwrap();
    conn.execute_batch("DROP TABLE recipe_ingredient_cross_ref").unwrap();

    // When: A recipe with ingredients is inserted
    let result = insert_recipe_with_ingredients(&mut conn, &Recipe::new("Chléb", ""), &["Mouka"]);

    // Then: The error surfaces and neither the recipe nor the ingredient was kept
    assert!(result.is_err());
    let recipes: i64 = conn
        .query_row("SELECT COUNT(*) FROM recipes", [], |r| r.get(0))
        .unwrap();
    let ingredients: i64 = conn
        .query_row("SELECT COUNT(*) FROM ingredients", [], |r| r.get(0))
        .unwrap();
    assert_eq!(recipes, 0);
    assert_eq!(ingredients, 0);
}
