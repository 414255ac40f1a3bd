//! Error type returned by construction. Queries (`contains`, `index`) never
//! fail — see the crate-level docs for why.

use core::fmt;

/// Failure modes for building a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied [`Config`](crate::Config) or key set cannot be built
    /// from, e.g. fewer than two segments or an empty key set.
    InvalidConfiguration(&'static str),
    /// Peeling did not succeed within the configured attempt budget.
    ConstructionBudgetExceeded {
        /// Number of seeds tried before giving up.
        attempts: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(reason) => {
                write!(f, "invalid filter configuration: {reason}")
            }
            Error::ConstructionBudgetExceeded { attempts } => write!(
                f,
                "peeling did not succeed within {attempts} attempt(s)"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Convenience alias for fallible construction.
pub type Result<T> = core::result::Result<T, Error>;
