//! The per-tick propagation driver.

use crate::config::{ConfigError, FlowConfig};
use crate::context::StepContext;
use crate::smoothing::RollingAverage;
use galvan_circuit::Branch;
use galvan_core::{BranchId, ParticleId, PropagateError, TickId};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// A continuation option for a marker crossing a junction.
///
/// Produced only during one transition search and released with the call's
/// stack frame; candidates are never retained across calls.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    branch: BranchId,
    position: f64,
}

/// Per-call scratch for the transition search. Inline capacity covers
/// realistic junction degrees without touching the heap.
type Candidates = SmallVec<[Candidate; 8]>;

/// What happened to one marker during `propagate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Advance {
    /// Current below the dead zone; the marker did not move.
    Held,
    /// Advanced within its branch.
    Moved,
    /// Crossed a junction onto a new branch.
    Switched,
    /// Defensive skip: the marker's position was not a finite number.
    Skipped,
    /// Ran off a dead end with no outgoing branch; left where it was.
    Stranded,
}

/// Diagnostics for one completed tick.
///
/// Purely observational; nothing here feeds back into marker motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickSummary {
    /// The tick this summary describes.
    pub tick: TickId,
    /// The global damping factor applied this tick, in `(0, 1]`.
    pub scale: f64,
    /// Smoothed percent-of-real-time figure (100 = unscaled).
    pub time_scale_percent: f64,
    /// Markers skipped defensively (non-finite position or dangling branch).
    pub skipped: u32,
    /// Markers that hit a dead end with no outgoing current.
    pub stranded: u32,
}

/// The electron-flow propagation engine.
///
/// Owns the per-tick algorithm and its long-lived state: the tuning
/// [`FlowConfig`], the smoothed time-scale window, the equalization RNG,
/// and a reusable visitation-order buffer. All circuit and marker state
/// stays with the collaborators handed in through [`StepContext`].
///
/// # Examples
///
/// ```
/// use galvan_circuit::CircuitTopology;
/// use galvan_core::{BranchId, JunctionId, TickId};
/// use galvan_flow::{FlowConfig, FlowEngine, StepContext};
/// use galvan_particle::ParticleSet;
///
/// let mut circuit = CircuitTopology::builder()
///     .junctions(2)
///     .branch(JunctionId(0), JunctionId(1), 10.0)
///     .build()
///     .unwrap();
/// circuit.set_current(BranchId(0), 1.0).unwrap();
///
/// let mut particles = ParticleSet::new();
/// particles.insert(BranchId(0), 5.0);
///
/// let mut engine = FlowEngine::new(FlowConfig::default()).unwrap();
/// let mut ctx = StepContext::new(&circuit, &mut particles, TickId(1), 0.03);
/// let summary = engine.update(&mut ctx);
/// assert!(summary.scale > 0.0 && summary.scale <= 1.0);
/// ```
pub struct FlowEngine {
    config: FlowConfig,
    scale: f64,
    smoothing: RollingAverage,
    rng: ChaCha8Rng,
    order: Vec<ParticleId>,
}

impl FlowEngine {
    /// Create an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if [`FlowConfig::validate`] rejects the configuration.
    pub fn new(config: FlowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let smoothing = RollingAverage::new(config.smoothing_window);
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            scale: 1.0,
            smoothing,
            rng,
            order: Vec::new(),
        })
    }

    /// The engine's tuning constants.
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Smoothed percent-of-real-time figure (100 = running unscaled).
    ///
    /// Observational only: rendering may display it, but it never feeds
    /// back into marker motion.
    pub fn time_scale_percent(&self) -> f64 {
        self.smoothing.average()
    }

    /// Advance every marker by one tick.
    ///
    /// Computes the global damping scale, propagates each marker in index
    /// order (possibly across junctions), then runs the configured number
    /// of equalization rounds, each over a freshly shuffled visitation
    /// order. Per-marker failures are isolated: a marker with corrupted
    /// state is skipped without disturbing the rest of the tick.
    pub fn update(&mut self, ctx: &mut StepContext<'_>) -> TickSummary {
        let dt = ctx.dt();

        let max_current = ctx.circuit().max_current_magnitude();
        let max_velocity = max_current * self.config.speed_scale;
        let max_step = max_velocity * dt;
        self.scale = if max_step >= self.config.max_step {
            self.config.max_step / max_step
        } else {
            1.0
        };
        self.smoothing.push(self.scale * 100.0);

        let mut skipped = 0u32;
        let mut stranded = 0u32;
        for index in 0..ctx.particles().len() {
            let id = ParticleId(index as u32);
            match self.propagate(ctx, id, dt) {
                Ok(Advance::Skipped) => skipped += 1,
                Ok(Advance::Stranded) => stranded += 1,
                Ok(Advance::Held | Advance::Moved | Advance::Switched) => {}
                Err(error) => {
                    debug_assert!(false, "propagation invariant broken: {error}");
                    tracing::warn!(%error, "skipping marker after broken invariant");
                    skipped += 1;
                }
            }
        }

        // A fixed visitation order would relax spacing with a visible
        // directional bias, so every round reshuffles.
        for _ in 0..self.config.num_equalize {
            let mut order = std::mem::take(&mut self.order);
            order.clear();
            order.extend((0..ctx.particles().len() as u32).map(ParticleId));
            order.shuffle(&mut self.rng);
            for &id in &order {
                self.equalize(ctx, id, dt);
            }
            self.order = order;
        }

        TickSummary {
            tick: ctx.tick(),
            scale: self.scale,
            time_scale_percent: self.smoothing.average(),
            skipped,
            stranded,
        }
    }

    /// Advance one marker along its branch, or carry it across a junction.
    fn propagate(
        &self,
        ctx: &mut StepContext<'_>,
        id: ParticleId,
        dt: f64,
    ) -> Result<Advance, PropagateError> {
        let position = ctx.particles().position_of(id);
        if !position.is_finite() {
            tracing::debug!(particle = %id, position, "marker position is not finite");
            return Ok(Advance::Skipped);
        }

        let branch_id = ctx.particles().branch_of(id);
        let Some(branch) = ctx.circuit().branch(branch_id) else {
            tracing::debug!(particle = %id, branch = %branch_id, "marker rides unknown branch");
            return Ok(Advance::Skipped);
        };

        let current = branch.current();
        if current == 0.0 || current.abs() < self.config.min_current {
            return Ok(Advance::Held);
        }

        let speed = current * self.config.speed_scale;
        let dx = speed * dt * self.scale;
        let new_x = position + dx;
        if branch.contains_scalar_location(new_x) {
            ctx.particles_mut().set_position(id, new_x);
            return Ok(Advance::Moved);
        }

        // Ran off one end; continue past the pivot junction.
        let (overshoot, under) = if new_x < 0.0 {
            (-new_x, true)
        } else {
            (new_x - branch.length(), false)
        };
        if !overshoot.is_finite() {
            return Err(PropagateError::NonFiniteOvershoot {
                particle: id,
                value: overshoot,
            });
        }
        if overshoot < 0.0 {
            return Err(PropagateError::NegativeOvershoot {
                particle: id,
                value: overshoot,
            });
        }

        let candidates = self.candidates(ctx, branch, overshoot, under);
        if candidates.is_empty() {
            // Dead end: no branch carries current away from the pivot.
            // The marker keeps its last in-range position; it is not
            // advanced to the junction and not clamped.
            return Ok(Advance::Stranded);
        }
        let chosen = self.choose_destination(ctx, &candidates);
        ctx.particles_mut()
            .set_location(id, chosen.branch, chosen.position);
        Ok(Advance::Switched)
    }

    /// Enumerate the branches a marker can continue onto past `pivot`.
    ///
    /// A neighbor qualifies only if its current, clamped to
    /// `±fire_current` for this decision only, flows out of the pivot.
    /// The clamp never mutates the circuit.
    fn candidates(
        &self,
        ctx: &StepContext<'_>,
        branch: &Branch,
        overshoot: f64,
        under: bool,
    ) -> Candidates {
        let pivot = if under { branch.start() } else { branch.end() };
        let mut found = Candidates::new();
        for neighbor_id in ctx.circuit().adjacent_branches(pivot) {
            let Some(neighbor) = ctx.circuit().branch(neighbor_id) else {
                continue;
            };
            let current = neighbor
                .current()
                .clamp(-self.config.fire_current, self.config.fire_current);
            let position = if current > 0.0 && neighbor.start() == pivot {
                // Entering at the start, the marker keeps its overshoot.
                overshoot.clamp(0.0, neighbor.length())
            } else if current < 0.0 && neighbor.end() == pivot {
                (neighbor.length() - overshoot).clamp(0.0, neighbor.length())
            } else {
                continue;
            };
            found.push(Candidate {
                branch: neighbor_id,
                position,
            });
        }
        found
    }

    /// Pick the least-crowded candidate; ties go to the first enumerated.
    ///
    /// Biasing transitions toward the emptiest outgoing branch
    /// approximates uniform marker density across parallel paths without
    /// charge-conservation accounting.
    fn choose_destination<'c>(
        &self,
        ctx: &StepContext<'_>,
        candidates: &'c [Candidate],
    ) -> &'c Candidate {
        let mut best = &candidates[0];
        let mut best_density = self.density(ctx, best.branch);
        for candidate in &candidates[1..] {
            let density = self.density(ctx, candidate.branch);
            if density < best_density {
                best = candidate;
                best_density = density;
            }
        }
        best
    }

    /// Markers per unit length on `branch`.
    fn density(&self, ctx: &StepContext<'_>, branch: BranchId) -> f64 {
        let occupancy = ctx.particles().occupancy(branch) as f64;
        ctx.circuit()
            .branch(branch)
            .map_or(f64::INFINITY, |b| occupancy / b.length())
    }

    /// Nudge one marker toward the midpoint of its in-branch neighbors.
    fn equalize(&self, ctx: &mut StepContext<'_>, id: ParticleId, dt: f64) {
        let Some(upper) = ctx.particles().upper_neighbor_in_branch(id) else {
            return;
        };
        let Some(lower) = ctx.particles().lower_neighbor_in_branch(id) else {
            return;
        };
        let position = ctx.particles().position_of(id);
        let lower_x = ctx.particles().position_of(lower);
        let upper_x = ctx.particles().position_of(upper);
        let midpoint = lower_x + (upper_x - lower_x) / 2.0;
        let vec = midpoint - position;

        let branch_id = ctx.particles().branch_of(id);
        let Some(branch) = ctx.circuit().branch(branch_id) else {
            return;
        };

        let same_dir = (vec > 0.0 && branch.current() > 0.0)
            || (vec < 0.0 && branch.current() < 0.0);
        let base = if same_dir {
            self.config.correction_with_current
        } else {
            self.config.correction_against_current
        };
        let correction_speed =
            base / self.config.num_equalize as f64 * self.config.equalize_scale;
        let max_dx = (correction_speed * dt).abs();

        let destination = if vec.abs() > max_dx {
            position + max_dx.copysign(vec)
        } else {
            midpoint
        };
        if branch.contains_scalar_location(destination) {
            ctx.particles_mut().set_position(id, destination);
        }
    }
}
