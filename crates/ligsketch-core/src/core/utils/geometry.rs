use nalgebra::Point3;

/// Angular step between consecutive atoms on the seed helix (137.5°).
pub const GOLDEN_ANGLE_DEGREES: f64 = 137.5;
/// Radius of the seed helix in Angstroms.
pub const HELIX_RADIUS: f64 = 1.5;
/// Elevation step between consecutive atoms, in radians.
pub const HELIX_ELEVATION_STEP: f64 = 0.3;

/// Position of the `index`-th atom (0-based) on the golden-angle helix.
///
/// The shape depends only on the index, never on the element, so two formulas with the same
/// token count start from identical coordinates.
pub fn helix_position(index: usize) -> Point3<f64> {
    let i = index as f64;
    let phi = i * GOLDEN_ANGLE_DEGREES.to_radians();
    let h = i * HELIX_ELEVATION_STEP;
    Point3::new(
        HELIX_RADIUS * phi.cos() * h.cos(),
        HELIX_RADIUS * phi.sin() * h.cos(),
        HELIX_RADIUS * h.sin(),
    )
}

pub fn calculate_rmsd(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}

/// Rounds to `decimals` places, breaking ties toward positive infinity.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor + 0.5).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn first_helix_atom_sits_on_x_axis() {
        let p = helix_position(0);
        assert!((p.x - HELIX_RADIUS).abs() < TOLERANCE);
        assert!(p.y.abs() < TOLERANCE);
        assert!(p.z.abs() < TOLERANCE);
    }

    #[test]
    fn helix_positions_never_coincide() {
        let points: Vec<_> = (0..200).map(helix_position).collect();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                assert!((points[i] - points[j]).norm() > 1e-6, "atoms {i} and {j} coincide");
            }
        }
    }

    #[test]
    fn helix_elevation_follows_index() {
        let p = helix_position(3);
        assert!((p.z - HELIX_RADIUS * 0.9f64.sin()).abs() < TOLERANCE);
    }

    #[test]
    fn rmsd_of_identical_sets_is_zero() {
        let a = vec![Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.5, 2.0)];
        assert_eq!(calculate_rmsd(&a, &a), Some(0.0));
    }

    #[test]
    fn rmsd_rejects_mismatched_lengths() {
        let a = vec![Point3::origin()];
        assert_eq!(calculate_rmsd(&a, &[]), None);
    }

    #[test]
    fn round_to_breaks_ties_upward() {
        assert_eq!(round_to(1.005 + 1e-12, 2), 1.01);
        assert_eq!(round_to(-0.25, 1), -0.2);
        assert_eq!(round_to(40.021, 2), 40.02);
    }
}
