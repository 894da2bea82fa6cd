//! # Met-aromatic Core Library
//!
//! Detection of methionine-aromatic interactions in protein structures: the sulfur
//! lone pairs of each methionine are estimated from its CG, SD and CE atoms and
//! tested against the edge midpoints of nearby PHE, TYR and TRP rings.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Plain data models (`AtomRecord`, `ResidueAtomGroup`,
//!   `InteractionCandidate`), vector geometry, static ring-atom tables, and I/O for
//!   PDB input and CSV output.
//!
//! - **[`engine`]: The Logic Core.** Configuration, progress reporting, and the
//!   individual analysis tasks (classification, ring geometry, lone pairs, scanning,
//!   bridge detection).
//!
//! - **[`workflows`]: The Public API.** [`workflows::analyze::run`] ties the tasks
//!   together and returns a status with the accepted candidates.
//!
//! ```ignore
//! use metaromatic::core::io::{pdb::PdbFile, traits::StructureFile};
//! use metaromatic::engine::{config::AnalysisConfig, progress::ProgressReporter};
//! use metaromatic::workflows::analyze;
//!
//! let records = PdbFile::read_from_path("1rcy.pdb")?;
//! let result = analyze::run(&records, &AnalysisConfig::default(), &ProgressReporter::new());
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
