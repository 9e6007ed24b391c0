use thiserror::Error;

pub mod identity;
pub mod places;
pub mod surface;
pub mod timer;

pub use self::{identity::*, places::*, surface::*, timer::*};

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by the collaborators of the panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Network failure: {0}")]
    Network(String),
    #[error("Not found")]
    NotFound,
    #[error("Rejected by the service: {0}")]
    Validation(String),
    #[error("Forbidden")]
    Forbidden,
    #[error("{0}")]
    Unexpected(String),
}
