use crate::core::models::interaction::InteractionCandidate;
use crate::core::models::residue::ResidueKind;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AromaticPartner {
    pub kind: ResidueKind,
    pub residue_number: isize,
}

/// A methionine interacting with several distinct aromatic residues at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bridge {
    pub methionine_residue: isize,
    /// Partners in the order they first appear in the candidate list.
    pub aromatics: Vec<AromaticPartner>,
}

impl Bridge {
    pub fn size(&self) -> usize {
        self.aromatics.len()
    }
}

#[instrument(skip_all, name = "bridging_task", fields(min_size = min_size))]
pub fn run(candidates: &[InteractionCandidate], min_size: usize) -> Vec<Bridge> {
    let mut partners: BTreeMap<isize, Vec<AromaticPartner>> = BTreeMap::new();

    for candidate in candidates {
        let partner = AromaticPartner {
            kind: candidate.aromatic_kind,
            residue_number: candidate.aromatic_residue,
        };
        let known = partners.entry(candidate.methionine_residue).or_default();
        if !known.contains(&partner) {
            known.push(partner);
        }
    }

    let bridges: Vec<Bridge> = partners
        .into_iter()
        .filter(|(_, aromatics)| aromatics.len() >= min_size)
        .map(|(methionine_residue, aromatics)| Bridge {
            methionine_residue,
            aromatics,
        })
        .collect();

    debug!(num_bridges = bridges.len(), "Bridge detection complete.");
    bridges
}
