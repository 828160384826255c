//! Crate-level error types.
//!
//! The camera itself never fails; only loading and saving options does.

use thiserror::Error;

/// Errors produced by the flycam-engine crate.
#[derive(Debug, Error)]
pub enum FlycamError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("options parse error: {0}")]
    OptionsParse(#[from] toml::de::Error),
    #[error("options serialization error: {0}")]
    OptionsSerialize(#[from] toml::ser::Error),
}
