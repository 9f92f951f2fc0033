/// Failures raised by interaction stores.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("interaction {0} is already stored")]
    Duplicate(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
