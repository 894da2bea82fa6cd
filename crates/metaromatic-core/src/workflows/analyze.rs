use crate::core::models::atom::AtomRecord;
use crate::core::models::interaction::InteractionCandidate;
use crate::engine::config::AnalysisConfig;
use crate::engine::progress::{Phase, Progress, ProgressReporter};
use crate::engine::tasks;
use crate::engine::tasks::bridging::Bridge;
use std::fmt;
use std::time::Instant;
use tracing::{info, instrument};

/// Outcome of a run. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    Success,
    /// The chain holds no methionine or no aromatic residue.
    NoRelevantResidues,
    /// Both residue sets exist but no pair satisfied the cutoffs.
    NoInteractionsFound,
}

impl AnalysisStatus {
    /// Numeric status code: `0`, `-1` or `-2`.
    pub fn code(&self) -> i32 {
        match self {
            AnalysisStatus::Success => 0,
            AnalysisStatus::NoRelevantResidues => -1,
            AnalysisStatus::NoInteractionsFound => -2,
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            AnalysisStatus::Success => "Success",
            AnalysisStatus::NoRelevantResidues => "No methionine or no aromatic residues found",
            AnalysisStatus::NoInteractionsFound => "No Met-aromatic interactions found",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub status: AnalysisStatus,
    pub candidates: Vec<InteractionCandidate>,
    pub elapsed_seconds: f64,
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        self.status == AnalysisStatus::Success
    }

    /// Groups the candidates into bridges of at least `min_size` aromatic partners.
    pub fn bridges(&self, min_size: usize) -> Vec<Bridge> {
        tasks::bridging::run(&self.candidates, min_size)
    }
}

/// Runs the full Met-aromatic analysis over the atom records of one structure.
///
/// Records are filtered to `config.chain_id`, classified, turned into ring
/// midpoints and lone-pair vectors, and scanned with `config.cutoffs`. Residues
/// whose geometry cannot be computed are skipped.
#[instrument(skip_all, name = "analysis_workflow", fields(chain = %config.chain_id))]
pub fn run(
    records: &[AtomRecord],
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> AnalysisResult {
    let start = Instant::now();

    // === Phase 1: Classification ===
    reporter.report(Progress::PhaseStart(Phase::Classification));
    let classified = tasks::classification::run(records, &config.chain_id);
    reporter.report(Progress::PhaseFinish {
        phase: Phase::Classification,
        produced: classified.methionines.len() + classified.aromatics.len(),
    });

    if classified.is_incomplete() {
        info!("Chain lacks methionine or aromatic residues; nothing to scan.");
        return finish(AnalysisStatus::NoRelevantResidues, Vec::new(), start);
    }

    // === Phase 2: Ring midpoints ===
    reporter.report(Progress::PhaseStart(Phase::RingGeometry));
    let rings = tasks::ring_geometry::run(&classified.aromatics);
    let skipped_rings = classified.aromatics.len() - rings.len();
    if skipped_rings > 0 {
        reporter.report(Progress::Message(format!(
            "Skipped {skipped_rings} aromatic residue(s) with an incomplete ring"
        )));
    }
    reporter.report(Progress::PhaseFinish {
        phase: Phase::RingGeometry,
        produced: rings.len(),
    });

    // === Phase 3: Lone pairs ===
    reporter.report(Progress::PhaseStart(Phase::LonePairs));
    let lone_pairs = tasks::lone_pairs::run(&classified.methionines, config.lone_pair_model);
    let skipped_methionines = classified.methionines.len() - lone_pairs.len();
    if skipped_methionines > 0 {
        reporter.report(Progress::Message(format!(
            "Skipped {skipped_methionines} methionine(s) without a usable CG-SD-CE frame"
        )));
    }
    reporter.report(Progress::PhaseFinish {
        phase: Phase::LonePairs,
        produced: lone_pairs.len(),
    });

    // === Phase 4: Scan ===
    reporter.report(Progress::PhaseStart(Phase::Scanning));
    let candidates = tasks::scanning::run(&lone_pairs, &rings, &config.cutoffs, reporter);
    reporter.report(Progress::PhaseFinish {
        phase: Phase::Scanning,
        produced: candidates.len(),
    });

    let status = if candidates.is_empty() {
        AnalysisStatus::NoInteractionsFound
    } else {
        AnalysisStatus::Success
    };
    finish(status, candidates, start)
}

fn finish(
    status: AnalysisStatus,
    candidates: Vec<InteractionCandidate>,
    start: Instant,
) -> AnalysisResult {
    let elapsed_seconds = start.elapsed().as_secs_f64();
    info!(
        status = status.code(),
        num_candidates = candidates.len(),
        elapsed_seconds,
        "Analysis complete."
    );
    AnalysisResult {
        status,
        candidates,
        elapsed_seconds,
    }
}
