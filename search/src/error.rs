use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HostError {
    #[error("typeahead worker has shut down")]
    Closed,

    #[error("typeahead worker failed: {0}")]
    Worker(String),
}
