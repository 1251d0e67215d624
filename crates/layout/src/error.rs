//! Error types for layout inputs.
//!
//! Layout computations themselves never fail; these errors only surface
//! when constructing inputs strictly (for example while validating
//! configuration).

/// Errors that can occur when building layout inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A viewport dimension was zero, negative, or not finite.
    #[error("invalid viewport {axis}: {value}")]
    InvalidDimension {
        /// Which dimension was rejected (`"width"` or `"height"`).
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A platform identifier did not name a known platform.
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
}

/// A specialized Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
