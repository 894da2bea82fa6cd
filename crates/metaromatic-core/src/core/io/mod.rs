//! Input/output for the Met-aromatic pipeline.
//!
//! Structure files are read through the [`traits::StructureFile`] interface
//! ([`pdb::PdbFile`] reads PDB `ATOM` records), and results are exported by
//! [`report`].

pub mod pdb;
pub mod report;
pub mod traits;
