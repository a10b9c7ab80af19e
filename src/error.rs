use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No catalog ingredient matches '{0}'")]
    IngredientNotFound(String),

    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, NutriError>;
