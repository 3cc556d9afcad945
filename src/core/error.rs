use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("No character named '{0}'")]
    CharacterNotFound(String),
}

pub type Result<T> = std::result::Result<T, ForgeError>;
