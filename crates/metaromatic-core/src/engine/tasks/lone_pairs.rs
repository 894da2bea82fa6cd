use crate::core::models::residue::ResidueAtomGroup;
use crate::core::utils::geometry::{
    GeometryError, mat_vec_mul, quadratic_rodrigues_matrix, unit,
};
use crate::core::utils::identifiers::methionine_atom_position;
use crate::engine::config::LonePairModel;
use nalgebra::{Point3, Vector3};
use std::f64::consts::SQRT_2;
use tracing::{debug, info, instrument};

/// Estimated lone-pair directions of one methionine sulfur, anchored at SD.
#[derive(Debug, Clone, PartialEq)]
pub struct LonePairVectors {
    pub residue_number: isize,
    pub sulfur: Point3<f64>,
    pub lone_pair_a: Vector3<f64>,
    pub lone_pair_g: Vector3<f64>,
}

/// The CG, SD and CE coordinates of one methionine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethionineFrame {
    pub cg: Point3<f64>,
    pub sd: Point3<f64>,
    pub ce: Point3<f64>,
}

impl MethionineFrame {
    /// Requires exactly CG, SD and CE, encountered in that order.
    pub fn from_group(group: &ResidueAtomGroup) -> Option<Self> {
        match group.atoms() {
            [cg, sd, ce]
                if [cg, sd, ce]
                    .iter()
                    .enumerate()
                    .all(|(i, atom)| methionine_atom_position(&atom.name) == Some(i)) =>
            {
                Some(Self {
                    cg: cg.position,
                    sd: sd.position,
                    ce: ce.position,
                })
            }
            _ => None,
        }
    }
}

/// Rotates the reversed S-C bond vectors about their normalized bisector.
///
/// `a = SD - CE` and `g = SD - CG`; the rotation matrix is `I + K + K^2` built
/// from the bisector of `a` and `g`. Returns `(lone_pair_a, lone_pair_g)`.
pub fn rodrigues_lone_pairs(
    frame: &MethionineFrame,
) -> Result<(Vector3<f64>, Vector3<f64>), GeometryError> {
    let a = -(frame.ce - frame.sd);
    let g = -(frame.cg - frame.sd);
    let axis = unit(&(0.5 * (a + g)))?;
    let rotation = quadratic_rodrigues_matrix(&axis);
    Ok((mat_vec_mul(&rotation, &a), mat_vec_mul(&rotation, &g)))
}

/// Places the lone pairs on either side of the C-S-C plane, along the outward
/// bisector of the two bonds. Returns `(lone_pair_a, lone_pair_g)`.
pub fn cross_product_lone_pairs(
    frame: &MethionineFrame,
) -> Result<(Vector3<f64>, Vector3<f64>), GeometryError> {
    let u = frame.ce - frame.sd;
    let v = frame.cg - frame.sd;
    let bisector = unit(&(-0.5 * (unit(&u)? + unit(&v)?)))?;
    let normal_a = unit(&u.cross(&v))?;
    let normal_g = unit(&v.cross(&u))?;
    Ok((bisector + SQRT_2 * normal_a, bisector + SQRT_2 * normal_g))
}

pub fn estimate(
    frame: &MethionineFrame,
    model: LonePairModel,
) -> Result<(Vector3<f64>, Vector3<f64>), GeometryError> {
    match model {
        LonePairModel::Rodrigues => rodrigues_lone_pairs(frame),
        LonePairModel::CrossProduct => cross_product_lone_pairs(frame),
    }
}

fn lone_pairs_for(group: &ResidueAtomGroup, model: LonePairModel) -> Option<LonePairVectors> {
    let Some(frame) = MethionineFrame::from_group(group) else {
        debug!(
            residue_number = group.residue_number,
            num_atoms = group.atoms().len(),
            "Skipping methionine without an ordered CG-SD-CE triple."
        );
        return None;
    };

    match estimate(&frame, model) {
        Ok((lone_pair_a, lone_pair_g)) => Some(LonePairVectors {
            residue_number: group.residue_number,
            sulfur: frame.sd,
            lone_pair_a,
            lone_pair_g,
        }),
        Err(e) => {
            debug!(
                residue_number = group.residue_number,
                error = %e,
                "Skipping methionine with degenerate geometry."
            );
            None
        }
    }
}

#[instrument(skip_all, name = "lone_pair_task", fields(model = %model))]
pub fn run(methionines: &[ResidueAtomGroup], model: LonePairModel) -> Vec<LonePairVectors> {
    let lone_pairs: Vec<LonePairVectors> = methionines
        .iter()
        .filter_map(|group| lone_pairs_for(group, model))
        .collect();
    info!(
        num_methionines = lone_pairs.len(),
        num_skipped = methionines.len() - lone_pairs.len(),
        "Estimated sulfur lone pairs."
    );
    lone_pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::AtomRecord;
    use crate::core::models::residue::ResidueKind;
    use crate::core::utils::geometry::angle_between_degrees;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn vec_approx_equal(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
        (a - b).norm() < 1e-9
    }

    fn symmetric_frame() -> MethionineFrame {
        MethionineFrame {
            cg: Point3::new(-1.0, 0.0, 1.0),
            sd: Point3::origin(),
            ce: Point3::new(1.0, 0.0, 1.0),
        }
    }

    fn methionine(atoms: &[(&str, Point3<f64>)]) -> ResidueAtomGroup {
        let records = atoms
            .iter()
            .map(|(name, position)| AtomRecord::new(1, name, "MET", "A", 18, *position))
            .collect();
        ResidueAtomGroup::with_atoms(18, ResidueKind::Methionine, records)
    }

    #[test]
    fn rodrigues_lone_pairs_for_symmetric_methionine() {
        let (a, g) = rodrigues_lone_pairs(&symmetric_frame()).unwrap();
        assert!(vec_approx_equal(&a, &Vector3::new(0.0, 1.0, -1.0)));
        assert!(vec_approx_equal(&g, &Vector3::new(0.0, -1.0, -1.0)));
    }

    #[test]
    fn rodrigues_lone_pairs_mirror_each_other_across_the_bond_plane() {
        let (a, g) = rodrigues_lone_pairs(&symmetric_frame()).unwrap();
        assert!(f64_approx_equal(a.norm(), g.norm()));
        assert!(f64_approx_equal(a.x, g.x));
        assert!(f64_approx_equal(a.y, -g.y));
        assert!(f64_approx_equal(a.z, g.z));
    }

    #[test]
    fn rodrigues_lone_pairs_for_right_angle_methionine() {
        let frame = MethionineFrame {
            cg: Point3::origin(),
            sd: Point3::new(1.0, 0.0, 0.0),
            ce: Point3::new(1.0, 1.0, 0.0),
        };
        let (a, g) = rodrigues_lone_pairs(&frame).unwrap();
        let half_sqrt_2 = SQRT_2 / 2.0;
        assert!(vec_approx_equal(&a, &Vector3::new(0.5, -0.5, -half_sqrt_2)));
        assert!(vec_approx_equal(&g, &Vector3::new(0.5, -0.5, half_sqrt_2)));
    }

    #[test]
    fn cross_product_lone_pairs_for_symmetric_methionine() {
        let (a, g) = cross_product_lone_pairs(&symmetric_frame()).unwrap();
        assert!(vec_approx_equal(&a, &Vector3::new(0.0, -SQRT_2, -1.0)));
        assert!(vec_approx_equal(&g, &Vector3::new(0.0, SQRT_2, -1.0)));
    }

    #[test]
    fn cross_product_lone_pairs_are_tetrahedral() {
        let (a, g) = cross_product_lone_pairs(&symmetric_frame()).unwrap();
        let angle = angle_between_degrees(&a, &g).unwrap();
        assert!((angle - 109.4712206).abs() < 1e-6);
    }

    #[test]
    fn opposite_bonds_are_degenerate() {
        let frame = MethionineFrame {
            cg: Point3::new(-1.0, 0.0, 0.0),
            sd: Point3::origin(),
            ce: Point3::new(1.0, 0.0, 0.0),
        };
        assert!(rodrigues_lone_pairs(&frame).is_err());
        assert!(cross_product_lone_pairs(&frame).is_err());
    }

    #[test]
    fn estimate_dispatches_on_model() {
        let frame = symmetric_frame();
        assert_eq!(
            estimate(&frame, LonePairModel::Rodrigues).unwrap(),
            rodrigues_lone_pairs(&frame).unwrap()
        );
        assert_eq!(
            estimate(&frame, LonePairModel::CrossProduct).unwrap(),
            cross_product_lone_pairs(&frame).unwrap()
        );
    }

    #[test]
    fn frame_requires_cg_sd_ce_in_order() {
        let cg = ("CG", Point3::new(-1.0, 0.0, 1.0));
        let sd = ("SD", Point3::origin());
        let ce = ("CE", Point3::new(1.0, 0.0, 1.0));

        assert!(MethionineFrame::from_group(&methionine(&[cg, sd, ce])).is_some());
        assert!(MethionineFrame::from_group(&methionine(&[sd, cg, ce])).is_none());
        assert!(MethionineFrame::from_group(&methionine(&[cg, sd])).is_none());
        assert!(MethionineFrame::from_group(&methionine(&[cg, sd, ce, ce])).is_none());
    }

    #[test]
    fn run_skips_incomplete_and_degenerate_methionines() {
        let complete = methionine(&[
            ("CG", Point3::new(-1.0, 0.0, 1.0)),
            ("SD", Point3::origin()),
            ("CE", Point3::new(1.0, 0.0, 1.0)),
        ]);
        let missing_ce = methionine(&[("CG", Point3::origin()), ("SD", Point3::origin())]);
        let linear = methionine(&[
            ("CG", Point3::new(-1.0, 0.0, 0.0)),
            ("SD", Point3::origin()),
            ("CE", Point3::new(1.0, 0.0, 0.0)),
        ]);

        let lone_pairs = run(&[missing_ce, complete, linear], LonePairModel::Rodrigues);
        assert_eq!(lone_pairs.len(), 1);
        assert_eq!(lone_pairs[0].residue_number, 18);
        assert_eq!(lone_pairs[0].sulfur, Point3::origin());
    }
}
