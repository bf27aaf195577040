//! Diagnostic error types for coursefinder-nlp.
//!
//! Parsing itself never fails: malformed or unrecognized input degrades to
//! empty results. Errors only arise at the edges, when loading a course
//! catalog or a configuration file, or when converting a grade token.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type.
///
/// Each variant wraps a subsystem error and keeps its diagnostic code and
/// help text intact for the CLI report.
#[derive(Debug, Error, Diagnostic)]
pub enum ParserError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Grade(#[from] GradeError),
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("cannot read course catalog {}", path.display())]
    #[diagnostic(
        code(coursefinder::catalog::io),
        help("Check that the catalog file exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid course catalog {}: {message}", path.display())]
    #[diagnostic(
        code(coursefinder::catalog::parse),
        help(
            "A catalog is a TOML file with optional top-level arrays \
             `courses = [..]` and `subjects = [..]` of display names."
        )
    )]
    Parse { path: PathBuf, message: String },
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    #[diagnostic(
        code(coursefinder::config::io),
        help("Pass an existing file to --config, or omit the flag to use defaults.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {message}")]
    #[diagnostic(
        code(coursefinder::config::parse),
        help(
            "Recognized keys are `grade_scale` (\"standard\" or \"extended\") \
             and `catalog` (path to a course catalog)."
        )
    )]
    Parse { message: String },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Grade errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GradeError {
    #[error("unknown grade token: \"{token}\"")]
    #[diagnostic(
        code(coursefinder::grade::unknown),
        help("Valid grades are A*, A, B, C, D, E, U, and on the extended scale D*, M, P.")
    )]
    Unknown { token: String },
}

/// Convenience alias for results using the top-level error.
pub type ParserResult<T> = std::result::Result<T, ParserError>;
