//! Engine-wide error types.
//!
//! The classification, eligibility, and metrics functions are total and
//! never fail; lookup failures carry the caller's own error type through
//! [`crate::cache::IndexCache::resolve`] untouched. What's left is
//! configuration parsing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
