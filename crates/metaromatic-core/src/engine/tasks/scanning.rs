use crate::core::models::interaction::InteractionCandidate;
use crate::core::utils::geometry::{angle_between_degrees, norm};
use crate::engine::config::ScanCutoffs;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks::lone_pairs::LonePairVectors;
use crate::engine::tasks::ring_geometry::RingMidpointSet;
use nalgebra::Point3;
use tracing::{debug, info, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tests one ring midpoint against one methionine's lone pairs.
///
/// Returns `None` when the midpoint is at or beyond the distance cutoff, when
/// both angles reach the angle cutoff, or when the midpoint sits on the sulfur.
pub fn evaluate_probe(
    lone_pairs: &LonePairVectors,
    ring: &RingMidpointSet,
    probe: &Point3<f64>,
    cutoffs: &ScanCutoffs,
) -> Option<InteractionCandidate> {
    let displacement = probe - lone_pairs.sulfur;
    let distance = norm(&displacement);
    if distance >= cutoffs.distance_angstroms {
        return None;
    }

    let angles = angle_between_degrees(&displacement, &lone_pairs.lone_pair_a).and_then(|theta| {
        angle_between_degrees(&displacement, &lone_pairs.lone_pair_g).map(|phi| (theta, phi))
    });
    let (theta, phi) = match angles {
        Ok(angles) => angles,
        Err(e) => {
            debug!(
                methionine = lone_pairs.residue_number,
                aromatic = ring.residue_number,
                error = %e,
                "Skipping degenerate probe."
            );
            return None;
        }
    };

    if theta < cutoffs.angle_degrees || phi < cutoffs.angle_degrees {
        trace!(
            methionine = lone_pairs.residue_number,
            aromatic = ring.residue_number,
            distance,
            theta,
            phi,
            "Accepted probe."
        );
        Some(InteractionCandidate {
            methionine_residue: lone_pairs.residue_number,
            aromatic_residue: ring.residue_number,
            aromatic_kind: ring.kind,
            distance,
            theta,
            phi,
        })
    } else {
        None
    }
}

/// All candidates of one methionine, ordered by ring and then by ring slot.
pub fn scan_methionine(
    lone_pairs: &LonePairVectors,
    rings: &[RingMidpointSet],
    cutoffs: &ScanCutoffs,
) -> Vec<InteractionCandidate> {
    rings
        .iter()
        .flat_map(|ring| {
            ring.midpoints
                .iter()
                .filter_map(move |probe| evaluate_probe(lone_pairs, ring, probe, cutoffs))
        })
        .collect()
}

#[instrument(skip_all, name = "interaction_scan_task")]
pub fn run(
    lone_pairs: &[LonePairVectors],
    rings: &[RingMidpointSet],
    cutoffs: &ScanCutoffs,
    reporter: &ProgressReporter,
) -> Vec<InteractionCandidate> {
    info!(
        num_methionines = lone_pairs.len(),
        num_rings = rings.len(),
        distance_cutoff = cutoffs.distance_angstroms,
        angle_cutoff = cutoffs.angle_degrees,
        "Scanning lone pairs against ring midpoints."
    );

    if lone_pairs.is_empty() || rings.is_empty() {
        return Vec::new();
    }

    reporter.report(Progress::TaskStart {
        total_steps: lone_pairs.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = lone_pairs.iter();

    #[cfg(feature = "parallel")]
    let iterator = lone_pairs.par_iter();

    // Indexed collection keeps methionine-major order in both modes.
    let per_methionine: Vec<Vec<InteractionCandidate>> = iterator
        .map(|methionine| {
            let found = scan_methionine(methionine, rings, cutoffs);
            reporter.report(Progress::TaskIncrement);
            found
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let candidates: Vec<InteractionCandidate> = per_methionine.into_iter().flatten().collect();
    info!(num_candidates = candidates.len(), "Interaction scan complete.");
    candidates
}
