use thiserror::Error;

pub type Result<T, E = MetadataError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum MetadataError {
    /// The dialect's markers are absent or produced no valid entries.
    #[error("{0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed embedded JSON; only ever surfaced per JSON-LD block.
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MetadataError {
    pub fn not_found(reason: impl Into<String>) -> Self { MetadataError::NotFound(reason.into()) }

    pub fn invalid(reason: impl Into<String>) -> Self { MetadataError::InvalidArgument(reason.into()) }

    pub fn is_not_found(&self) -> bool { matches!(self, MetadataError::NotFound(_)) }
}
