use packtrie_format::FormatError;
use packtrie_query::QueryError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("key {0:?} not found")]
    NotFound(String),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
