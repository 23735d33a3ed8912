/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 *
 * The allocation engine itself never fails: allocate/deallocate report
 * outcomes (see `memory::types`). Everything here belongs to the layers
 * around it - config loading and interactive input - and is resolved
 * before any value reaches the engine.
 */

use super::data_structures::InlineString;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    #[diagnostic(
        code(config::io),
        help("Check that the file named by QUICKFIT_CONFIG exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    #[diagnostic(
        code(config::parse),
        help("Expected a JSON object with common_sizes (array of integers) and policy (strict or replenishing).")
    )]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {var}: {value:?}")]
    #[diagnostic(
        code(config::invalid_env),
        help("QUICKFIT_COMMON_SIZES takes comma-separated integers; QUICKFIT_FREE_LIST_POLICY takes strict or replenishing.")
    )]
    InvalidEnv { var: &'static str, value: String },
}

/// Interactive input errors
#[derive(Error, Debug, Diagnostic)]
pub enum InputError {
    #[error("Expected a whole number for {field}, got {value:?}")]
    #[diagnostic(code(input::not_a_number), help("Enter digits only, e.g. 32."))]
    NotANumber { field: InlineString, value: String },

    #[error("{field} must be positive, got {value}")]
    #[diagnostic(code(input::not_positive), help("Segment and process sizes must be greater than zero."))]
    NotPositive { field: InlineString, value: i64 },

    #[error("{field} must not be empty")]
    #[diagnostic(code(input::empty), help("Give every process a name."))]
    Empty { field: InlineString },

    #[error("Input ended while reading {field}")]
    #[diagnostic(code(input::eof))]
    UnexpectedEof { field: InlineString },

    #[error("I/O error during interactive session")]
    #[diagnostic(code(input::io))]
    Io(#[from] std::io::Error),
}

/// Top-level error for the binary
#[derive(Error, Debug, Diagnostic)]
pub enum QuickFitError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] InputError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type InputResult<T> = Result<T, InputError>;
pub type QuickFitResult<T> = Result<T, QuickFitError>;
