use super::atom::AtomRecord;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The residue types that take part in a Met-aromatic interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ResidueKind {
    #[serde(rename = "MET")]
    Methionine,
    #[serde(rename = "PHE")]
    Phenylalanine,
    #[serde(rename = "TYR")]
    Tyrosine,
    #[serde(rename = "TRP")]
    Tryptophan,
}

impl ResidueKind {
    pub fn code(&self) -> &'static str {
        match self {
            ResidueKind::Methionine => "MET",
            ResidueKind::Phenylalanine => "PHE",
            ResidueKind::Tyrosine => "TYR",
            ResidueKind::Tryptophan => "TRP",
        }
    }

    pub fn is_aromatic(&self) -> bool {
        !matches!(self, ResidueKind::Methionine)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Residue name '{0}' is not one of MET, PHE, TYR or TRP")]
pub struct ParseResidueKindError(pub String);

impl FromStr for ResidueKind {
    type Err = ParseResidueKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "MET" => Ok(ResidueKind::Methionine),
            "PHE" => Ok(ResidueKind::Phenylalanine),
            "TYR" => Ok(ResidueKind::Tyrosine),
            "TRP" => Ok(ResidueKind::Tryptophan),
            other => Err(ParseResidueKindError(other.to_string())),
        }
    }
}

impl fmt::Display for ResidueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// The atoms of one physical residue that matter for the interaction, in the
/// order they were encountered in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueAtomGroup {
    pub residue_number: isize, // Grouping key: residue sequence number
    pub kind: ResidueKind,
    pub(crate) atoms: Vec<AtomRecord>,
}

impl ResidueAtomGroup {
    pub fn new(residue_number: isize, kind: ResidueKind) -> Self {
        Self {
            residue_number,
            kind,
            atoms: Vec::new(),
        }
    }

    pub fn with_atoms(residue_number: isize, kind: ResidueKind, atoms: Vec<AtomRecord>) -> Self {
        Self {
            residue_number,
            kind,
            atoms,
        }
    }

    pub(crate) fn add_atom(&mut self, atom: AtomRecord) {
        self.atoms.push(atom);
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    pub fn atom_by_name(&self, name: &str) -> Option<&AtomRecord> {
        self.atoms.iter().find(|atom| atom.name == name)
    }
}
