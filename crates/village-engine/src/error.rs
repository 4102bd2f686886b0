//! Error types for the engine binary.
//!
//! [`EngineError`] wraps every failure mode during startup and the run so
//! that `main` can propagate with `?`.

/// Top-level error for the engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: village_core::config::ConfigError,
    },

    /// Clock construction failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: village_core::clock::ClockError,
    },

    /// Simulation runner failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: village_core::runner::RunnerError,
    },

    /// The log filter could not be built.
    #[error("invalid log filter {filter:?}: {message}")]
    LogFilter {
        /// The filter string that failed to parse.
        filter: String,
        /// Parser message.
        message: String,
    },
}
