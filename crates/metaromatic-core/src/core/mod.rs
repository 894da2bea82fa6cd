//! # Core Module
//!
//! Stateless building blocks of the Met-aromatic analysis.
//!
//! - **Molecular Representation** ([`models`]) - Atom records, residue kinds and groups,
//!   interaction candidates
//! - **File I/O** ([`io`]) - PDB `ATOM` record reading and CSV export of results
//! - **Utilities** ([`utils`]) - Vector and matrix geometry, residue and ring-atom tables

pub mod io;
pub mod models;
pub mod utils;
