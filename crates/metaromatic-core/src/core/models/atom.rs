use nalgebra::Point3;

/// A single `ATOM` record as read from a structure file.
///
/// Records are immutable once parsed; every downstream stage borrows them.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The atom serial number. Carried for diagnostics only.
    pub serial: usize,
    /// The name of the atom (e.g., "SD", "CE1").
    pub name: String,
    /// The three-letter residue name (e.g., "MET", "TRP").
    pub residue_name: String,
    /// The chain identifier (e.g., "A").
    pub chain_id: String,
    /// The residue sequence number from the source file.
    pub residue_number: isize,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl AtomRecord {
    pub fn new(
        serial: usize,
        name: &str,
        residue_name: &str,
        chain_id: &str,
        residue_number: isize,
        position: Point3<f64>,
    ) -> Self {
        Self {
            serial,
            name: name.to_string(),
            residue_name: residue_name.to_string(),
            chain_id: chain_id.to_string(),
            residue_number,
            position,
        }
    }
}
