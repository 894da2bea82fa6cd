//! Layered configuration for the CLI.
//!
//! Values are resolved field by field with the precedence
//! command-line flag > `-S key=value` override > TOML file > built-in default,
//! and the result is validated by the core `AnalysisConfigBuilder`.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
