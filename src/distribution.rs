//! Empirical distributions used to place sources and pick reverberation times.
//!
//! ## Available distributions
//!
//! | **Distribution** | **Values** | **Sampling** |
//! |------------------|------------|--------------|
//! | [`target_distance_table`] | 1 m to 7 m | weighted, total mass 98 |
//! | [`t60_table`] | 0.0 s to 0.9 s | weighted, total mass 98 |
//! | [`UniformGrid`] | 0.5 m steps below a per-target bound | uniform over the grid |
//!
//! The weighted tables follow the distributions measured for far-field speech recognition
//! training data: most talkers stand 2 to 4 meters from the device and most rooms have a T60
//! around half a second.
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use rand::distr::Distribution;
//! use roomsim_params::distribution::t60_table;
//!
//! let table = t60_table();
//! let mut rng = StdRng::seed_from_u64(7);
//! let t60 = table.sample(&mut rng);
//! assert!((0.0..=0.9).contains(&t60));
//! assert_eq!(table.total_weight(), 98);
//! ```

use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng, RngExt,
};

use crate::common::assert_error_traits;

/// Target source to microphone distance (meters) and its relative frequency.
pub const TARGET_DISTANCE_WEIGHTS: [(f64, u32); 7] = [
    (1.0, 14),
    (2.0, 22),
    (3.0, 29),
    (4.0, 21),
    (5.0, 9),
    (6.0, 2),
    (7.0, 1),
];

/// Reverberation time (seconds) and its relative frequency.
pub const T60_WEIGHTS: [(f64, u32); 10] = [
    (0.0, 4),
    (0.1, 6),
    (0.2, 7),
    (0.3, 10),
    (0.4, 13),
    (0.5, 17),
    (0.6, 17),
    (0.7, 13),
    (0.8, 7),
    (0.9, 4),
];

/// Error building a [`Discrete`] distribution.
#[derive(Debug, thiserror::Error, Clone)]
pub enum DistributionError {
    /// The table has no entries, or its weights are all zero or overflow.
    #[error("Invalid weight table")]
    InvalidWeights {
        /// Reason reported by the weighted sampler.
        #[source]
        source: rand::distr::weighted::Error,
    },
}
assert_error_traits! {DistributionError}

/// A finite distribution over values with integer weights.
///
/// Sampling picks a value with probability `weight / total_weight` using cumulative weights,
/// so a table `{1: 14, 2: 22}` behaves like drawing from a pool holding fourteen ones and
/// twenty-two twos.
#[derive(Clone, Debug)]
pub struct Discrete<T> {
    values: Vec<T>,
    weights: Vec<u32>,
    index: WeightedIndex<u32>,
}

impl<T> Discrete<T> {
    /// Builds a distribution from `(value, weight)` pairs.
    pub fn new(table: impl IntoIterator<Item = (T, u32)>) -> Result<Self, DistributionError> {
        let (values, weights): (Vec<T>, Vec<u32>) = table.into_iter().unzip();
        let index = WeightedIndex::new(&weights)
            .map_err(|source| DistributionError::InvalidWeights { source })?;
        Ok(Self {
            values,
            weights,
            index,
        })
    }

    /// The values in table order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The weights in table order.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false, a `Discrete` cannot be built from an empty table.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Probability mass of `value`, zero if it is not in the table.
    pub fn probability(&self, value: &T) -> f64
    where
        T: PartialEq,
    {
        let weight: u32 = self
            .values
            .iter()
            .zip(&self.weights)
            .filter(|(v, _)| *v == value)
            .map(|(_, w)| *w)
            .sum();
        weight as f64 / self.total_weight() as f64
    }
}

impl<T: Clone> Distribution<T> for Discrete<T> {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)].clone()
    }
}

/// Distribution of the distance between the target source and the microphone.
pub fn target_distance_table() -> Discrete<f64> {
    Discrete::new(TARGET_DISTANCE_WEIGHTS).expect("Target distance table should be valid")
}

/// Distribution of the reverberation time.
pub fn t60_table() -> Discrete<f64> {
    Discrete::new(T60_WEIGHTS).expect("T60 table should be valid")
}

/// Evenly spaced points `start, start + step, ...` strictly below `stop`, sampled uniformly.
///
/// Holds `ceil((stop - start) / step)` points, the same grid `numpy.arange` produces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformGrid {
    start: f64,
    step: f64,
    len: usize,
}

impl UniformGrid {
    /// Builds the grid, or `None` if it would hold no point.
    pub fn new(start: f64, stop: f64, step: f64) -> Option<Self> {
        if !(step > 0.0) || !(stop > start) {
            return None;
        }
        let len = ((stop - start) / step).ceil() as usize;
        Some(Self { start, step, len })
    }

    /// First point.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Spacing between points.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of points, at least one.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false, empty grids are never built.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Point at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.len).then(|| self.point(index))
    }

    /// Largest point of the grid.
    pub fn last(&self) -> f64 {
        self.point(self.len - 1)
    }

    /// Iterates over all points in increasing order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.point(i))
    }

    #[inline]
    fn point(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }
}

impl Distribution<f64> for UniformGrid {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.point(rng.random_range(0..self.len))
    }
}
