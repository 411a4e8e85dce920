use recipebox_core_types::RequestId;
use thiserror::Error;

/// Result type alias using RbError
pub type Result<T> = std::result::Result<T, RbError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (the CLI, tests, any
/// future presentation layer) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RbErrorKind {
    // Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,
    InvalidSeed,
    InvalidMealPayload,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Concurrency,

    // Internal
    Internal,
}

impl RbErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            RbErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            RbErrorKind::NotFound => "ERR_NOT_FOUND",
            RbErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            RbErrorKind::InvalidSeed => "ERR_INVALID_SEED",
            RbErrorKind::InvalidMealPayload => "ERR_INVALID_MEAL_PAYLOAD",
            RbErrorKind::Io => "ERR_IO",
            RbErrorKind::Serialization => "ERR_SERIALIZATION",
            RbErrorKind::Persistence => "ERR_PERSISTENCE",
            RbErrorKind::Concurrency => "ERR_CONCURRENCY",
            RbErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus optional
/// context (operation, entity, request) for debugging.
#[derive(Debug, Clone)]
pub struct RbError {
    kind: RbErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl RbError {
    /// Create a new error with the specified kind
    pub fn new(kind: RbErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> RbErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for RbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RbError {}

// ========== End Error Facility ==========

/// Domain-level failures raised by RecipeBox components
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecipeBoxError {
    /// Recipe was not found
    #[error("Recipe not found: {recipe_id}")]
    RecipeNotFound { recipe_id: i64 },

    /// Seed file declares a schema version this build cannot read
    #[error("Unsupported seed schema_version: {found}. Expected {expected}")]
    UnsupportedSeedVersion { found: u32, expected: u32 },

    /// Seed file failed validation
    #[error("Invalid seed: {reason}")]
    InvalidSeed { reason: String },

    /// Random-meal payload could not be interpreted
    #[error("Invalid meal payload: {reason}")]
    InvalidMealPayload { reason: String },

    /// Generic input validation failure
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl From<RecipeBoxError> for RbError {
    fn from(err: RecipeBoxError) -> Self {
        let message = err.to_string();
        match err {
            RecipeBoxError::RecipeNotFound { recipe_id } => RbError::new(RbErrorKind::NotFound)
                .with_entity_id(recipe_id.to_string())
                .with_message("Recipe not found"),

            RecipeBoxError::UnsupportedSeedVersion { .. } | RecipeBoxError::InvalidSeed { .. } => {
                RbError::new(RbErrorKind::InvalidSeed)
                    .with_op("seed_parse")
                    .with_message(message)
            }

            RecipeBoxError::InvalidMealPayload { .. } => {
                RbError::new(RbErrorKind::InvalidMealPayload)
                    .with_op("meal_parse")
                    .with_message(message)
            }

            RecipeBoxError::InvalidInput { .. } => {
                RbError::new(RbErrorKind::InvalidInput).with_message(message)
            }
        }
    }
}
