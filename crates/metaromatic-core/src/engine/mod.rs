//! # Engine Module
//!
//! The computational stages of the Met-aromatic analysis and the settings that
//! drive them.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Chain selection, scan cutoffs, and the lone-pair model
//! - **Progress Monitoring** ([`progress`]) - Phase and task events for user feedback
//! - **Tasks** ([`tasks`]) - Classification, ring geometry, lone-pair estimation,
//!   interaction scanning, and bridge detection
//!
//! Geometric failures are local to one residue or one probe and never abort a run;
//! the affected item is skipped and traced at `debug` level.

pub mod config;
pub mod progress;
pub mod tasks;
