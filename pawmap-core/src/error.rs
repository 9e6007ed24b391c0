use crate::gateways;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Empty review text")]
    EmptyReview,
    #[error("This is not allowed without a viewer identity")]
    Unauthorized,
    #[error("This is not allowed")]
    Forbidden,
    #[error("The review does not exist")]
    ReviewNotFound,
    #[error("The review is not being edited")]
    NotEditing,
    #[error("No place has been opened")]
    NotOpen,
    #[error(transparent)]
    Gateway(#[from] gateways::Error),
}
