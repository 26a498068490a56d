// SPDX-License-Identifier: LGPL-3.0-only

use std::ffi::NulError;

use thiserror::Error;

/// Errors raised while selecting and constructing the platform integration.
#[derive(Error, Debug)]
pub enum IntegrationError {
    /// The requested key is not served by this plugin.
    #[error("Unknown integration key: {0}")]
    UnknownKey(String),

    /// A process argument could not be passed on to the fallback backend.
    #[error("Cannot pass argument {index} to the fallback backend: {source}")]
    InvalidArgument {
        /// Position of the argument.
        index: usize,
        /// The underlying conversion error.
        #[source]
        source: NulError,
    },

    /// The fallback backend factory produced no integration.
    #[error("Fallback backend '{0}' is unavailable")]
    FallbackUnavailable(String),
}

/// Result type for integration construction.
pub type IntegrationResult<T> = Result<T, IntegrationError>;
