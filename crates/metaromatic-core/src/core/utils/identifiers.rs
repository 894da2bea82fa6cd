use crate::core::models::residue::ResidueKind;
use phf::{Map, phf_map};

pub const RING_SIZE: usize = 6;

// Position of each thioether atom along the CG-SD-CE chain.
static METHIONINE_ATOM_ORDER: Map<&'static str, usize> = phf_map! {
    "CG" => 0, "SD" => 1, "CE" => 2,
};

// Slots walk the benzene ring bond by bond; the order encodes connectivity.
static BENZENE_RING_SLOTS: Map<&'static str, usize> = phf_map! {
    "CG" => 0, "CD2" => 1, "CE2" => 2, "CZ" => 3, "CE1" => 4, "CD1" => 5,
};

// The six-membered half of the indole ring.
static INDOLE_RING_SLOTS: Map<&'static str, usize> = phf_map! {
    "CD2" => 0, "CE3" => 1, "CZ3" => 2, "CH2" => 3, "CZ2" => 4, "CE2" => 5,
};

pub fn methionine_atom_position(atom_name: &str) -> Option<usize> {
    METHIONINE_ATOM_ORDER.get(atom_name.trim()).copied()
}

pub fn is_methionine_probe_atom(atom_name: &str) -> bool {
    methionine_atom_position(atom_name).is_some()
}

/// Canonical ring slot (`0..RING_SIZE`) of `atom_name` in a residue of `kind`.
pub fn ring_slot(kind: ResidueKind, atom_name: &str) -> Option<usize> {
    let table = match kind {
        ResidueKind::Phenylalanine | ResidueKind::Tyrosine => &BENZENE_RING_SLOTS,
        ResidueKind::Tryptophan => &INDOLE_RING_SLOTS,
        ResidueKind::Methionine => return None,
    };
    table.get(atom_name.trim()).copied()
}

pub fn is_ring_atom(kind: ResidueKind, atom_name: &str) -> bool {
    ring_slot(kind, atom_name).is_some()
}
