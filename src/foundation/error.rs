/// Result alias used across the crate.
pub type AllocResult<T> = Result<T, AllocError>;

/// Errors returned by the allocator and its collaborators.
#[derive(thiserror::Error, Debug)]
pub enum AllocError {
    /// Invalid input value, such as an inverted `OpRange` or a zero-sized surface.
    #[error("validation error: {0}")]
    Validation(String),

    /// Allocator driven out of order: a malformed or future interval, a registration after
    /// `assign`, or a second `assign`.
    #[error("misuse error: {0}")]
    Misuse(String),

    /// The resource provider could not back a proxy.
    #[error("resource creation failed: {0}")]
    Creation(String),

    /// Options or dump (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Provider-defined error passed through unchanged.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AllocError {
    /// Build an [`AllocError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AllocError::Misuse`] value.
    pub fn misuse(msg: impl Into<String>) -> Self {
        Self::Misuse(msg.into())
    }

    /// Build an [`AllocError::Creation`] value.
    pub fn creation(msg: impl Into<String>) -> Self {
        Self::Creation(msg.into())
    }

    /// Build an [`AllocError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// True for errors caused by calling the allocator out of order.
    pub fn is_misuse(&self) -> bool {
        matches!(self, Self::Misuse(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
