//! Uniform marker layout.

use crate::set::ParticleSet;
use galvan_core::BranchId;

/// Seed a [`ParticleSet`] with uniformly spaced markers.
///
/// `branches` supplies `(id, length)` pairs (typically mapped off a circuit
/// backend's branch iterator). Each branch receives markers every
/// `separation` units, inset half a separation from each end so markers on
/// adjacent branches do not pile up at shared junctions. A branch shorter
/// than one separation still gets a single centered marker.
///
/// # Errors
///
/// Returns `Err` if `separation` is NaN, infinite, zero, or negative, or if
/// any supplied length is not finite and positive.
///
/// # Examples
///
/// ```
/// use galvan_core::{BranchId, ParticleAccess};
/// use galvan_particle::seed_uniform;
///
/// let set = seed_uniform([(BranchId(0), 10.0)], 2.0).unwrap();
/// assert_eq!(set.occupancy(BranchId(0)), 5);
/// ```
pub fn seed_uniform(
    branches: impl IntoIterator<Item = (BranchId, f64)>,
    separation: f64,
) -> Result<ParticleSet, String> {
    if !separation.is_finite() || separation <= 0.0 {
        return Err(format!(
            "separation must be finite and positive, got {separation}"
        ));
    }

    let mut set = ParticleSet::new();
    for (branch, length) in branches {
        if !length.is_finite() || length <= 0.0 {
            return Err(format!(
                "branch {branch} length must be finite and positive, got {length}"
            ));
        }
        if length < separation {
            set.insert(branch, length / 2.0);
            continue;
        }
        let mut x = separation / 2.0;
        while x <= length - separation / 2.0 {
            set.insert(branch, x);
            x += separation;
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use galvan_core::ParticleAccess;

    #[test]
    fn spacing_is_uniform_and_inset() {
        let set = seed_uniform([(BranchId(0), 10.0)], 2.0).unwrap();
        let positions: Vec<f64> = set.iter().map(|(_, p)| p.position()).collect();
        assert_eq!(positions, vec![1.0, 3.0, 5.0, 7.0, 9.0]);
    }

    #[test]
    fn short_branch_gets_one_centered_marker() {
        let set = seed_uniform([(BranchId(2), 0.5)], 2.0).unwrap();
        assert_eq!(set.occupancy(BranchId(2)), 1);
        let (_, p) = set.iter().next().unwrap();
        assert_eq!(p.position(), 0.25);
    }

    #[test]
    fn every_marker_lands_within_its_branch() {
        let branches = [(BranchId(0), 3.7), (BranchId(1), 0.2), (BranchId(2), 51.0)];
        let set = seed_uniform(branches, 0.56).unwrap();
        for (_, p) in set.iter() {
            let length = branches[p.branch().0 as usize].1;
            assert!(p.position() >= 0.0 && p.position() <= length);
        }
    }

    #[test]
    fn rejects_bad_separation() {
        for separation in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(seed_uniform([(BranchId(0), 1.0)], separation).is_err());
        }
    }

    #[test]
    fn rejects_bad_length() {
        assert!(seed_uniform([(BranchId(0), f64::NAN)], 1.0).is_err());
    }
}
