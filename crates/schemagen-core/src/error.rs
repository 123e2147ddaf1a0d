//! Error types for value generation.

/// Error type for generation operations.
///
/// `InvalidArgument` is raised before any sampling, `Unsatisfiable` is a
/// deterministic proof that no value exists, and `NoExampleFound` only means a
/// bounded search came up empty. `Unsupported` marks well-formed constraints
/// whose numbers fall outside the exact decimal domain (about 28 significant
/// digits, magnitudes below 7.9e28).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The constraints contradict each other independent of any search
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No value can satisfy the constraints
    #[error("Unsatisfiable constraints: {0}")]
    Unsatisfiable(String),

    /// A bounded search ran out of attempts
    #[error("No example found after {attempts} attempts: {reason}")]
    NoExampleFound {
        /// Number of candidates drawn before giving up
        attempts: usize,
        /// What was being searched for
        reason: String,
    },

    /// A valid constraint value the exact decimal domain cannot hold
    #[error("Unsupported constraint value: {0}")]
    Unsupported(String),
}

impl GenerationError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn unsatisfiable(message: impl Into<String>) -> Self {
        Self::Unsatisfiable(message.into())
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported(message.into())
    }

    pub fn exhausted(attempts: usize, reason: impl Into<String>) -> Self {
        Self::NoExampleFound {
            attempts,
            reason: reason.into(),
        }
    }

    /// Whether a different seed or a larger budget could succeed.
    pub fn is_search_exhausted(&self) -> bool {
        matches!(self, Self::NoExampleFound { .. })
    }
}

/// Result alias used throughout the generator crates.
pub type Result<T, E = GenerationError> = std::result::Result<T, E>;
