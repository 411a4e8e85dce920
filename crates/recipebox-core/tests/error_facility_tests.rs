use recipebox_core::errors::{RbError, RbErrorKind, RecipeBoxError};
use recipebox_core_types::RequestId;

#[test]
fn test_recipe_not_found_verifiable_by_kind() {
    let err = RecipeBoxError::RecipeNotFound { recipe_id: 42 };

    let rb_err: RbError = err.into();

    assert_eq!(rb_err.kind(), RbErrorKind::NotFound);
    assert_eq!(rb_err.code(), "ERR_NOT_FOUND");
    assert_eq!(rb_err.entity_id(), Some("42"));
}

#[test]
fn test_seed_errors_map_to_invalid_seed() {
    let version: RbError = RecipeBoxError::UnsupportedSeedVersion {
        found: 3,
        expected: 0,
    }
    .into();
    let invalid: RbError = RecipeBoxError::InvalidSeed {
        reason: "recipe #1 has a blank name".to_string(),
    }
    .into();

    assert_eq!(version.kind(), RbErrorKind::InvalidSeed);
    assert!(version.message().contains("schema_version: 3"));
    assert_eq!(invalid.op(), Some("seed_parse"));
    assert!(invalid.message().contains("blank name"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (RbErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (RbErrorKind::NotFound, "ERR_NOT_FOUND"),
        (RbErrorKind::ConstraintViolation, "ERR_CONSTRAINT_VIOLATION"),
        (RbErrorKind::InvalidSeed, "ERR_INVALID_SEED"),
        (RbErrorKind::InvalidMealPayload, "ERR_INVALID_MEAL_PAYLOAD"),
        (RbErrorKind::Io, "ERR_IO"),
        (RbErrorKind::Serialization, "ERR_SERIALIZATION"),
        (RbErrorKind::Persistence, "ERR_PERSISTENCE"),
        (RbErrorKind::Concurrency, "ERR_CONCURRENCY"),
        (RbErrorKind::Internal, "ERR_INTERNAL"),
    ];

    let mut codes = std::collections::HashSet::new();
    for (kind, code) in kinds {
        assert_eq!(kind.code(), code);
        assert!(codes.insert(code), "duplicate code {}", code);
    }
}

#[test]
fn test_request_id_is_carried_and_displayed() {
    let request_id = RequestId::from_string("req-7".to_string());
    let err = RbError::new(RbErrorKind::Persistence)
        .with_op("update_recipe")
        .with_request_id(request_id.clone());

    assert_eq!(err.request_id(), Some(&request_id));
    assert!(err.to_string().contains("(request_id: req-7)"));
}
