use thiserror::Error;

/// Unified error type for `mdprs` operations.
#[derive(Debug, Error)]
pub enum MdpError {
    /// Raised when the supplied decision process is partially observable.
    ///
    /// Value iteration plans over the true state and is only sound when the
    /// controller observes that state directly. Belief-state models must be
    /// reduced to their underlying fully-observable process before solving.
    #[error(
        "value iteration requires a fully-observable decision process, but the supplied model \
         reports partial observability; reduce it to its underlying MDP before solving"
    )]
    UnsupportedModel,

    /// Raised when provided vectors or matrices have incompatible dimensions.
    #[error("dimension mismatch in {context}: expected {expected} but found {found}")]
    DimensionMismatch {
        /// Human-readable context describing the operation.
        context: &'static str,
        /// The required dimension, often the model-implied value.
        expected: usize,
        /// The dimension that was actually supplied.
        found: usize,
    },
}

impl MdpError {
    /// Helper to format a [`DimensionMismatch`](MdpError::DimensionMismatch) error.
    pub fn dimension_mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            found,
        }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, MdpError>;
