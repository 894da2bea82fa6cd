use crate::core::models::residue::{ResidueAtomGroup, ResidueKind};
use crate::core::utils::geometry::midpoint;
use crate::core::utils::identifiers::{RING_SIZE, ring_slot};
use nalgebra::Point3;
use tracing::{debug, info, instrument};

/// The six ring-edge midpoints of one aromatic residue, in canonical ring order.
#[derive(Debug, Clone, PartialEq)]
pub struct RingMidpointSet {
    pub residue_number: isize,
    pub kind: ResidueKind,
    pub midpoints: [Point3<f64>; RING_SIZE],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RingDefect {
    UnknownAtom,
    DuplicateSlot(usize),
    MissingSlot(usize),
}

/// Places the ring atoms of `group` into their canonical slots.
fn canonical_ring(group: &ResidueAtomGroup) -> Result<[Point3<f64>; RING_SIZE], RingDefect> {
    let mut slots: [Option<Point3<f64>>; RING_SIZE] = [None; RING_SIZE];

    for atom in group.atoms() {
        let slot = ring_slot(group.kind, &atom.name).ok_or(RingDefect::UnknownAtom)?;
        if slots[slot].replace(atom.position).is_some() {
            return Err(RingDefect::DuplicateSlot(slot));
        }
    }

    let mut ring = [Point3::origin(); RING_SIZE];
    for (slot, position) in slots.into_iter().enumerate() {
        ring[slot] = position.ok_or(RingDefect::MissingSlot(slot))?;
    }
    Ok(ring)
}

/// Midpoint `i` lies on the edge from ring atom `i` to ring atom `i + 1`, wrapping
/// around so the last midpoint closes the ring.
pub fn hexagon_midpoints(ring: &[Point3<f64>; RING_SIZE]) -> [Point3<f64>; RING_SIZE] {
    std::array::from_fn(|i| midpoint(&ring[i], &ring[(i + 1) % RING_SIZE]))
}

pub fn ring_midpoints(group: &ResidueAtomGroup) -> Option<RingMidpointSet> {
    match canonical_ring(group) {
        Ok(ring) => Some(RingMidpointSet {
            residue_number: group.residue_number,
            kind: group.kind,
            midpoints: hexagon_midpoints(&ring),
        }),
        Err(defect) => {
            debug!(
                residue_number = group.residue_number,
                kind = %group.kind,
                ?defect,
                "Skipping aromatic residue with an incomplete ring."
            );
            None
        }
    }
}

#[instrument(skip_all, name = "ring_geometry_task")]
pub fn run(aromatics: &[ResidueAtomGroup]) -> Vec<RingMidpointSet> {
    let rings: Vec<RingMidpointSet> = aromatics.iter().filter_map(ring_midpoints).collect();
    info!(
        num_rings = rings.len(),
        num_skipped = aromatics.len() - rings.len(),
        "Computed ring midpoints."
    );
    rings
}
