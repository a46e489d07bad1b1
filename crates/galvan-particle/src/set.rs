//! The [`ParticleSet`] arena and its occupancy index.

use galvan_core::{BranchId, Particle, ParticleAccess, ParticleId};
use indexmap::IndexMap;

/// Reference implementation of [`ParticleAccess`].
///
/// Particles live in a flat arena; ids are their indices and never expire.
/// A branch → particle-ids index is maintained alongside so neighbor and
/// occupancy queries touch only the particles on one branch instead of the
/// whole set. `IndexMap` keeps branch iteration order deterministic, which
/// matters for reproducible test output.
///
/// # Examples
///
/// ```
/// use galvan_core::{BranchId, ParticleAccess};
/// use galvan_particle::ParticleSet;
///
/// let mut set = ParticleSet::new();
/// let a = set.insert(BranchId(0), 1.0);
/// let b = set.insert(BranchId(0), 3.0);
/// assert_eq!(set.occupancy(BranchId(0)), 2);
/// assert_eq!(set.upper_neighbor_in_branch(a), Some(b));
///
/// set.set_location(b, BranchId(1), 0.5);
/// assert_eq!(set.occupancy(BranchId(0)), 1);
/// assert_eq!(set.upper_neighbor_in_branch(a), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    by_branch: IndexMap<BranchId, Vec<ParticleId>>,
}

impl ParticleSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker on `branch` at scalar offset `position`.
    ///
    /// Returns the marker's permanent id.
    pub fn insert(&mut self, branch: BranchId, position: f64) -> ParticleId {
        let id = ParticleId(self.particles.len() as u32);
        self.particles.push(Particle::new(branch, position));
        self.by_branch.entry(branch).or_default().push(id);
        id
    }

    /// Borrow a particle record.
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0 as usize)
    }

    /// Iterate over `(id, particle)` pairs in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
        self.particles
            .iter()
            .enumerate()
            .map(|(i, p)| (ParticleId(i as u32), p))
    }

    fn unindex(&mut self, id: ParticleId, branch: BranchId) {
        if let Some(ids) = self.by_branch.get_mut(&branch) {
            ids.retain(|&other| other != id);
        }
    }
}

impl ParticleAccess for ParticleSet {
    fn len(&self) -> usize {
        self.particles.len()
    }

    fn branch_of(&self, id: ParticleId) -> BranchId {
        self.particles[id.0 as usize].branch()
    }

    fn position_of(&self, id: ParticleId) -> f64 {
        self.particles[id.0 as usize].position()
    }

    fn set_position(&mut self, id: ParticleId, position: f64) {
        self.particles[id.0 as usize].set_position(position);
    }

    fn set_location(&mut self, id: ParticleId, branch: BranchId, position: f64) {
        let old = self.particles[id.0 as usize].branch();
        if old != branch {
            self.unindex(id, old);
            self.by_branch.entry(branch).or_default().push(id);
        }
        self.particles[id.0 as usize].set_location(branch, position);
    }

    fn upper_neighbor_in_branch(&self, id: ParticleId) -> Option<ParticleId> {
        let me = &self.particles[id.0 as usize];
        let ids = self.by_branch.get(&me.branch())?;
        let mut best: Option<(ParticleId, f64)> = None;
        for &other in ids {
            if other == id {
                continue;
            }
            let x = self.particles[other.0 as usize].position();
            if x > me.position() && best.map_or(true, |(_, bx)| x < bx) {
                best = Some((other, x));
            }
        }
        best.map(|(other, _)| other)
    }

    fn lower_neighbor_in_branch(&self, id: ParticleId) -> Option<ParticleId> {
        let me = &self.particles[id.0 as usize];
        let ids = self.by_branch.get(&me.branch())?;
        let mut best: Option<(ParticleId, f64)> = None;
        for &other in ids {
            if other == id {
                continue;
            }
            let x = self.particles[other.0 as usize].position();
            if x < me.position() && best.map_or(true, |(_, bx)| x > bx) {
                best = Some((other, x));
            }
        }
        best.map(|(other, _)| other)
    }

    fn occupancy(&self, branch: BranchId) -> usize {
        self.by_branch.get(&branch).map_or(0, Vec::len)
    }
}
