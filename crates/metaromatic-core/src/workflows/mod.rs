//! # Workflows Module
//!
//! High-level entry points that run the engine tasks end to end.
//!
//! - **Analysis Workflow** ([`analyze`]) - Classifies the records of one chain,
//!   derives ring midpoints and sulfur lone pairs, scans every pair against the
//!   configured cutoffs, and reports a status with the accepted candidates.

pub mod analyze;
