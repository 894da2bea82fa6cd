//! # Core Models Module
//!
//! Plain data types shared by every stage of the Met-aromatic pipeline.
//!
//! - [`atom`] - Parsed `ATOM` records with their coordinates
//! - [`residue`] - Residue kinds and per-residue atom groups
//! - [`interaction`] - The interaction candidates emitted by the scan
//!
//! ```ignore
//! use metaromatic::core::models::{atom::AtomRecord, residue::{ResidueAtomGroup, ResidueKind}};
//!
//! let sd = AtomRecord::new(1, "SD", "MET", "A", 12, Point3::new(1.0, 0.0, 0.0));
//! let group = ResidueAtomGroup::with_atoms(12, ResidueKind::Methionine, vec![sd]);
//! ```

pub mod atom;
pub mod interaction;
pub mod residue;
