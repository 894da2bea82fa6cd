use super::residue::ResidueKind;
use serde::Serialize;

/// One methionine / ring-midpoint pair that satisfied both the distance and the
/// angular condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct InteractionCandidate {
    pub methionine_residue: isize,
    pub aromatic_residue: isize,
    pub aromatic_kind: ResidueKind,
    /// Distance from SD to the ring midpoint in Angstroms.
    pub distance: f64,
    /// Angle between the SD -> midpoint vector and lone pair `a`, in degrees.
    pub theta: f64,
    /// Angle between the SD -> midpoint vector and lone pair `g`, in degrees.
    pub phi: f64,
}
