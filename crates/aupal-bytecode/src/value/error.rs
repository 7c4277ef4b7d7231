//! Errors raised while encoding value literals.

/// A literal that cannot be encoded for its type tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("value {value} is too small (minimum value is {min})")]
    TooSmall { value: String, min: String },

    #[error("value {value} is too large (maximum value is {max})")]
    TooLarge { value: String, max: String },

    /// Fractional part is not a multiple of 1/16.
    #[error("value {value} cannot be represented as fix point number")]
    NotRepresentable { value: String },

    #[error("invalid integer value \"{0}\"")]
    InvalidInteger(String),

    #[error("invalid boolean value \"{0}\"")]
    InvalidBoolean(String),

    #[error("invalid floating point value \"{0}\"")]
    InvalidFloat(String),

    #[error("string \"{0}\" contains non-ASCII or NUL characters")]
    InvalidString(String),
}
