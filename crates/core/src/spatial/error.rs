use thiserror::Error;

/// Errors raised by the checked spatial vector APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpatialError {
    /// A component list did not hold exactly six values.
    #[error("spatial vector needs exactly {expected} components, got {found}")]
    WrongArity { expected: usize, found: usize },

    /// A component index fell outside `[0, 5]`.
    #[error("component index {index} is out of range [0, 5]")]
    IndexOutOfRange { index: usize },
}

pub type Result<T> = std::result::Result<T, SpatialError>;
