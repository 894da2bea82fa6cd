use crate::core::models::atom::AtomRecord;
use crate::core::models::residue::{ResidueAtomGroup, ResidueKind};
use crate::core::utils::identifiers::{is_methionine_probe_atom, is_ring_atom};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Atom records of one chain split into methionine and aromatic residue groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedResidues {
    pub methionines: Vec<ResidueAtomGroup>,
    pub aromatics: Vec<ResidueAtomGroup>,
}

impl ClassifiedResidues {
    /// True when either side of the interaction has no residues at all.
    pub fn is_incomplete(&self) -> bool {
        self.methionines.is_empty() || self.aromatics.is_empty()
    }
}

// Groups records by residue number while preserving first-appearance order.
#[derive(Default)]
struct GroupCollector {
    groups: Vec<ResidueAtomGroup>,
    index: HashMap<isize, usize>,
}

impl GroupCollector {
    fn push(&mut self, kind: ResidueKind, record: &AtomRecord) {
        match self.index.get(&record.residue_number) {
            Some(&slot) => {
                let group = &mut self.groups[slot];
                if group.kind != kind {
                    warn!(
                        residue_number = record.residue_number,
                        existing = %group.kind,
                        found = %kind,
                        "Residue number is shared by two residue kinds; ignoring atom {}.",
                        record.name
                    );
                    return;
                }
                group.add_atom(record.clone());
            }
            None => {
                self.index.insert(record.residue_number, self.groups.len());
                let mut group = ResidueAtomGroup::new(record.residue_number, kind);
                group.add_atom(record.clone());
                self.groups.push(group);
            }
        }
    }
}

#[instrument(skip_all, name = "classification_task")]
pub fn run(records: &[AtomRecord], chain_id: &str) -> ClassifiedResidues {
    info!(
        num_records = records.len(),
        chain = chain_id,
        "Classifying atom records."
    );

    let mut methionines = GroupCollector::default();
    let mut aromatics = GroupCollector::default();

    for record in records.iter().filter(|r| r.chain_id == chain_id) {
        let Ok(kind) = ResidueKind::from_str(&record.residue_name) else {
            continue;
        };
        match kind {
            ResidueKind::Methionine if is_methionine_probe_atom(&record.name) => {
                methionines.push(kind, record);
            }
            _ if kind.is_aromatic() && is_ring_atom(kind, &record.name) => {
                aromatics.push(kind, record);
            }
            _ => {}
        }
    }

    let classified = ClassifiedResidues {
        methionines: methionines.groups,
        aromatics: aromatics.groups,
    };

    debug!(
        num_methionines = classified.methionines.len(),
        num_aromatics = classified.aromatics.len(),
        "Classification complete."
    );

    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn record(name: &str, residue_name: &str, chain: &str, residue_number: isize) -> AtomRecord {
        AtomRecord::new(1, name, residue_name, chain, residue_number, Point3::origin())
    }

    fn names(group: &ResidueAtomGroup) -> Vec<&str> {
        group.atoms().iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn keeps_only_relevant_atoms_of_relevant_residues() {
        let records = vec![
            record("N", "MET", "A", 1),
            record("CG", "MET", "A", 1),
            record("SD", "MET", "A", 1),
            record("CE", "MET", "A", 1),
            record("CB", "PHE", "A", 2),
            record("CG", "PHE", "A", 2),
            record("OH", "TYR", "A", 3),
            record("CZ", "TYR", "A", 3),
            record("NE1", "TRP", "A", 4),
            record("CH2", "TRP", "A", 4),
            record("CG", "TRP", "A", 4),
            record("CA", "ALA", "A", 5),
        ];

        let classified = run(&records, "A");

        assert_eq!(classified.methionines.len(), 1);
        assert_eq!(names(&classified.methionines[0]), vec!["CG", "SD", "CE"]);
        assert_eq!(classified.aromatics.len(), 3);
        assert_eq!(names(&classified.aromatics[0]), vec!["CG"]);
        assert_eq!(classified.aromatics[1].kind, ResidueKind::Tyrosine);
        assert_eq!(names(&classified.aromatics[1]), vec!["CZ"]);
        assert_eq!(names(&classified.aromatics[2]), vec!["CH2"]);
        assert!(!classified.is_incomplete());
    }

    #[test]
    fn filters_records_by_chain() {
        let records = vec![
            record("SD", "MET", "B", 1),
            record("CG", "PHE", "A", 2),
            record("CG", "PHE", "B", 3),
        ];

        let chain_a = run(&records, "A");
        assert!(chain_a.methionines.is_empty());
        assert_eq!(chain_a.aromatics.len(), 1);
        assert!(chain_a.is_incomplete());

        let chain_b = run(&records, "B");
        assert_eq!(chain_b.methionines.len(), 1);
        assert_eq!(chain_b.aromatics[0].residue_number, 3);
    }

    #[test]
    fn groups_are_ordered_by_first_appearance() {
        let records = vec![
            record("CG", "PHE", "A", 40),
            record("CG", "TRP", "A", 7),
            record("CD2", "TRP", "A", 7),
            record("CD1", "PHE", "A", 40),
            record("CZ", "TYR", "A", 12),
        ];

        let classified = run(&records, "A");
        let order: Vec<isize> = classified
            .aromatics
            .iter()
            .map(|g| g.residue_number)
            .collect();
        assert_eq!(order, vec![40, 7, 12]);
        assert_eq!(names(&classified.aromatics[0]), vec!["CG", "CD1"]);
        // TRP CG is not part of the six-membered ring.
        assert_eq!(names(&classified.aromatics[1]), vec!["CD2"]);
    }

    #[test]
    fn conflicting_kinds_on_one_residue_number_keep_the_first() {
        let records = vec![
            record("CG", "PHE", "A", 9),
            record("CZ", "TYR", "A", 9),
            record("CZ", "PHE", "A", 9),
        ];

        let classified = run(&records, "A");
        assert_eq!(classified.aromatics.len(), 1);
        assert_eq!(classified.aromatics[0].kind, ResidueKind::Phenylalanine);
        assert_eq!(names(&classified.aromatics[0]), vec!["CG", "CZ"]);
    }

    #[test]
    fn empty_input_is_incomplete() {
        let classified = run(&[], "A");
        assert!(classified.is_incomplete());
        assert_eq!(classified, ClassifiedResidues::default());
    }
}
