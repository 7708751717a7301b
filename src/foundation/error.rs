pub type EmitResult<T> = Result<T, EmitError>;

#[derive(thiserror::Error, Debug)]
pub enum EmitError {
    /// A value outside the set the wire format knows how to encode.
    #[error("unexpected variant: {0}")]
    UnexpectedVariant(String),

    /// A field required by the selected record version is absent.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A value the wire format cannot represent (too many entries, offset out of range, ...).
    #[error("inconsistent value: {0}")]
    Inconsistent(String),

    /// A valid request the emitter does not support yet.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("range error: {0}")]
    Range(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmitError {
    pub fn unexpected_variant(msg: impl Into<String>) -> Self {
        Self::UnexpectedVariant(msg.into())
    }

    pub fn missing_field(msg: impl Into<String>) -> Self {
        Self::MissingField(msg.into())
    }

    pub fn inconsistent(msg: impl Into<String>) -> Self {
        Self::Inconsistent(msg.into())
    }

    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::NotImplemented(msg.into())
    }

    pub fn range(msg: impl Into<String>) -> Self {
        Self::Range(msg.into())
    }
}

/// Converts a collection length into the integer type of its count field.
pub(crate) fn count_as<T: TryFrom<usize>>(len: usize, what: &str) -> EmitResult<T> {
    T::try_from(len).map_err(|_| EmitError::inconsistent(format!("too many {what}: {len}")))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
