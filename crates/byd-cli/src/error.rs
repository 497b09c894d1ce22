//! Error types for byd-cli

use thiserror::Error;

/// Result type alias for byd-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in byd-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from byd-core
    #[error("{0}")]
    Core(#[from] byd_core::Error),

    /// Terminal or stdout failure
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The user pressed Ctrl-C or input reached end of file
    #[error("Interrupted")]
    Interrupted,

    /// Command-line input that cannot be acted on
    #[error("{message}")]
    Input {
        /// What was wrong with the input
        message: String,
    },

    /// Logging could not be initialized
    #[error("Logging error: {message}")]
    Logging {
        /// What went wrong
        message: String,
    },
}

impl Error {
    /// Creates a new logging error.
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Error::Logging {
            message: message.into(),
        }
    }

    /// Creates a new input error.
    pub fn input<S: Into<String>>(message: S) -> Self {
        Error::Input {
            message: message.into(),
        }
    }

    /// Returns `true` for a user interrupt.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Error::Interrupted)
    }
}
