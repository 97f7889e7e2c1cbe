//! Drawing complete scenes: a room, a microphone, a target source and noise sources.
//!
//! Every random draw goes through the generator's own RNG in a fixed order, so a given seed
//! and configuration always produce the same scenes:
//!
//! 1. room width, depth and height
//! 2. microphone x, y and z
//! 3. T60
//! 4. target source attempts (azimuth, elevation, radius per attempt)
//! 5. for each noise source in turn, its attempts (azimuth, elevation, radius per attempt)

use std::iter::FusedIterator;

use rand::{rngs::StdRng, Rng, RngExt, SeedableRng};

use crate::common::assert_error_traits;
use crate::config::GeneratorConfig;
use crate::constants::{
    DEFAULT_MAX_TRY_TIMES, NOISE_DISTANCE_MAX, NOISE_DISTANCE_MIN, NOISE_DISTANCE_STEP,
};
use crate::distribution::{t60_table, target_distance_table, Discrete, UniformGrid};
use crate::parameter::SceneParameter;
use crate::sampler::{PositionNotFound, SphericalSampler};

/// A target source and the noise sources placed in the same room.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    /// The speech source.
    pub target_source: SceneParameter,
    /// Interfering sources sharing the target's room, microphone and T60.
    pub noise_sources: Vec<SceneParameter>,
}

/// Why a sample produced no [`Scene`].
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The target source could not be placed.
    #[error("Could not place the target source")]
    Target(#[source] PositionNotFound),
    /// One of the noise sources could not be placed, which voids the whole batch.
    #[error("Could not place noise source {index}")]
    Noise {
        /// Position of the failing source in the batch.
        index: usize,
        /// The placement failure.
        #[source]
        source: PositionNotFound,
    },
}
assert_error_traits! {SceneError}

/// Generates room acoustic scenes for a room impulse response simulator.
///
/// Owns its RNG, so independent generators never influence each other.
///
/// # Example
///
/// ```rust
/// use roomsim_params::{GeneratorConfig, ParameterGenerator};
///
/// let mut generator = ParameterGenerator::new(4, 42, GeneratorConfig::default());
/// for scene in &mut generator {
///     match scene {
///         Ok(scene) => assert_eq!(scene.noise_sources.len(), 3),
///         Err(err) => println!("skipping sample: {err}"),
///     }
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ParameterGenerator<R: Rng = StdRng> {
    rng: R,
    sample_num: usize,
    config: GeneratorConfig,
    max_try_times: usize,
    target_distances: Discrete<f64>,
    t60s: Discrete<f64>,
}

impl ParameterGenerator<StdRng> {
    /// Creates a generator of `sample_num` scenes with a `StdRng` seeded from `seed`.
    pub fn new(sample_num: usize, seed: u64, config: GeneratorConfig) -> Self {
        Self::new_with_rng(sample_num, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParameterGenerator<R> {
    /// Creates a generator of `sample_num` scenes drawing from a custom RNG.
    pub fn new_with_rng(sample_num: usize, config: GeneratorConfig, rng: R) -> Self {
        Self {
            rng,
            sample_num,
            config,
            max_try_times: DEFAULT_MAX_TRY_TIMES,
            target_distances: target_distance_table(),
            t60s: t60_table(),
        }
    }

    /// Sets how many candidates are drawn per source before giving up. Defaults to
    /// [`DEFAULT_MAX_TRY_TIMES`].
    #[must_use]
    pub fn with_max_try_times(mut self, max_try_times: usize) -> Self {
        self.max_try_times = max_try_times;
        self
    }

    /// Number of items a full pass of [`samples`](Self::samples) yields.
    pub fn sample_num(&self) -> usize {
        self.sample_num
    }

    /// The configuration scenes are drawn from.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Candidates drawn per source before giving up.
    pub fn max_try_times(&self) -> usize {
        self.max_try_times
    }

    /// Draws a room, a microphone, a T60 and a target source position.
    pub fn gen_target(&mut self) -> Result<SceneParameter, PositionNotFound> {
        let ranges = self.config.room;
        let room = [
            ranges.x.sample(&mut self.rng),
            ranges.y.sample(&mut self.rng),
            ranges.z.sample(&mut self.rng),
        ];

        let mic = [
            self.rng.random::<f64>() * room[0],
            self.rng.random::<f64>() * room[1],
            self.rng.random::<f64>() * room[2],
        ];

        let t60 = self.rng.sample(&self.t60s);

        let sampler = SphericalSampler::new(
            self.config.target.azimuth,
            self.config.target.elevation,
            self.max_try_times,
        );
        let source = sampler.sample(&mut self.rng, room, mic, &self.target_distances)?;

        Ok(SceneParameter::new(room, mic, source, t60))
    }

    /// Draws `noise_sources_number` noise sources around the microphone of `target`.
    ///
    /// All sources share the target's room, microphone and T60. If any one of them cannot be
    /// placed the whole batch is discarded.
    pub fn gen_noise_sources_list(
        &mut self,
        target: &SceneParameter,
        noise_sources_number: usize,
    ) -> Result<Vec<SceneParameter>, PositionNotFound> {
        self.noise_sources(target, noise_sources_number)
            .map_err(|(_, err)| err)
    }

    /// Radii noise sources around `target` are drawn from.
    ///
    /// Runs from 0.5 m in 0.5 m steps up to, excluding, the smaller of 7.5 m and the target's
    /// [`max_distance`](SceneParameter::max_distance). `None` when that bound leaves no point.
    pub fn noise_distance_grid(target: &SceneParameter) -> Option<UniformGrid> {
        let stop = target.max_distance().min(NOISE_DISTANCE_MAX);
        UniformGrid::new(NOISE_DISTANCE_MIN, stop, NOISE_DISTANCE_STEP)
    }

    /// Lazily yields [`sample_num`](Self::sample_num) scenes or failure markers.
    ///
    /// Iterating again continues the RNG stream rather than replaying the same scenes.
    pub fn samples(&mut self) -> Samples<'_, R> {
        Samples {
            remaining: self.sample_num,
            index: 0,
            generator: self,
        }
    }

    fn noise_sources(
        &mut self,
        target: &SceneParameter,
        number: usize,
    ) -> Result<Vec<SceneParameter>, (usize, PositionNotFound)> {
        if number == 0 {
            return Ok(Vec::new());
        }
        let Some(grid) = Self::noise_distance_grid(target) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                max_distance = target.max_distance(),
                "noise distance grid is empty"
            );
            return Err((0, PositionNotFound { attempts: 0 }));
        };

        let sampler = SphericalSampler::new(
            self.config.noise.azimuth,
            self.config.noise.elevation,
            self.max_try_times,
        );
        (0..number)
            .map(|index| {
                sampler
                    .sample(&mut self.rng, target.room(), target.mic(), &grid)
                    .map(|source| {
                        SceneParameter::new(target.room(), target.mic(), source, target.t60())
                    })
                    .map_err(|err| (index, err))
            })
            .collect()
    }

    fn next_scene(&mut self) -> Result<Scene, SceneError> {
        let target_source = self.gen_target().map_err(SceneError::Target)?;
        let noise_sources = self
            .noise_sources(&target_source, self.config.noise.number)
            .map_err(|(index, source)| SceneError::Noise { index, source })?;
        Ok(Scene {
            target_source,
            noise_sources,
        })
    }
}

impl<'a, R: Rng> IntoIterator for &'a mut ParameterGenerator<R> {
    type Item = Result<Scene, SceneError>;
    type IntoIter = Samples<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples()
    }
}

/// Iterator over the scenes of a [`ParameterGenerator`], see
/// [`ParameterGenerator::samples`].
#[derive(Debug)]
pub struct Samples<'a, R: Rng> {
    generator: &'a mut ParameterGenerator<R>,
    remaining: usize,
    index: usize,
}

impl<R: Rng> Iterator for Samples<'_, R> {
    type Item = Result<Scene, SceneError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let scene = self.generator.next_scene();

        #[cfg(feature = "tracing")]
        if let Err(err) = &scene {
            tracing::debug!(sample = self.index, %err, "sample skipped");
        }
        self.index += 1;

        Some(scene)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Samples<'_, R> {}

impl<R: Rng> FusedIterator for Samples<'_, R> {}
