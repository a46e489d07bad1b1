//! Fixed-capacity rolling average for the reported time-scale percentage.

/// A ring buffer of recent samples with an on-demand average.
///
/// The buffer is sized once at construction and never reallocates; pushing
/// past capacity overwrites the oldest sample. Used to smooth the
/// percent-of-real-time figure the engine reports, so a single slowed tick
/// does not make a HUD readout flicker.
#[derive(Clone, Debug)]
pub struct RollingAverage {
    samples: Vec<f64>,
    capacity: usize,
    cursor: usize,
}

impl RollingAverage {
    /// Create an empty window holding up to `capacity` samples.
    ///
    /// `capacity` must be non-zero; the engine's config validation
    /// guarantees this for the engine-owned instance.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    /// Record a sample, evicting the oldest once the window is full.
    pub fn push(&mut self, sample: f64) {
        if self.samples.len() < self.capacity {
            self.samples.push(sample);
        } else {
            self.samples[self.cursor] = sample;
            self.cursor = (self.cursor + 1) % self.capacity;
        }
    }

    /// Mean of the samples currently in the window, 0.0 when empty.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// `true` before the first sample arrives.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples the window retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
