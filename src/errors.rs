use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Tracked changes must be attributed to an author but the configured author is empty")]
    EmptyAuthor,
}
