//! Rejection sampling of source positions around a microphone.
//!
//! A candidate is built from a random azimuth, elevation and radius relative to a reference
//! point and kept only if it stays at least [`WALL_CLEARANCE`] away from every wall. Sampling
//! gives up after a fixed number of attempts, which is an expected outcome for small rooms or
//! narrow angular ranges and is reported as [`PositionNotFound`].

use rand::{distr::Distribution, Rng};

use crate::common::assert_error_traits;
use crate::config::Interval;
use crate::constants::WALL_CLEARANCE;
use crate::math::{add, inside_with_margin, spherical_to_cartesian, Vec3};

/// No valid position was found within the attempt budget.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[error("No valid source position found after {attempts} attempts")]
pub struct PositionNotFound {
    /// Number of candidates that were drawn and rejected.
    pub attempts: usize,
}
assert_error_traits! {PositionNotFound}

/// Where and how far from a reference point sources may be placed.
#[derive(Copy, Clone, Debug)]
pub struct SphericalSampler {
    azimuth: Interval,
    elevation: Interval,
    max_try_times: usize,
}

impl SphericalSampler {
    /// Creates a sampler from azimuth and elevation ranges given in degrees.
    pub fn new(
        azimuth_degrees: Interval,
        elevation_degrees: Interval,
        max_try_times: usize,
    ) -> Self {
        Self {
            azimuth: azimuth_degrees.to_radians(),
            elevation: elevation_degrees.to_radians(),
            max_try_times,
        }
    }

    /// Azimuth range in radians.
    pub fn azimuth(&self) -> Interval {
        self.azimuth
    }

    /// Elevation range in radians.
    pub fn elevation(&self) -> Interval {
        self.elevation
    }

    /// Attempts made before giving up.
    pub fn max_try_times(&self) -> usize {
        self.max_try_times
    }

    /// Draws a position inside `room` around `reference` with a radius from `distances`.
    ///
    /// Each attempt draws the azimuth, then the elevation, then the radius. The first
    /// candidate whose coordinates all lie in `[WALL_CLEARANCE, room - WALL_CLEARANCE]` is
    /// returned.
    pub fn sample<R, D>(
        &self,
        rng: &mut R,
        room: Vec3,
        reference: Vec3,
        distances: &D,
    ) -> Result<Vec3, PositionNotFound>
    where
        R: Rng + ?Sized,
        D: Distribution<f64> + ?Sized,
    {
        for _attempt in 0..self.max_try_times {
            let azimuth = self.azimuth.sample(rng);
            let elevation = self.elevation.sample(rng);
            let radius = distances.sample(rng);

            let source = add(reference, spherical_to_cartesian(azimuth, elevation, radius));
            if inside_with_margin(source, room, WALL_CLEARANCE) {
                #[cfg(feature = "tracing")]
                tracing::trace!(attempt = _attempt + 1, ?source, "source position accepted");
                return Ok(source);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            attempts = self.max_try_times,
            ?room,
            ?reference,
            "no valid source position found"
        );
        Err(PositionNotFound {
            attempts: self.max_try_times,
        })
    }
}

/// Draws a source position around `micpos`, see [`SphericalSampler::sample`].
///
/// Angles are in degrees. Callers without a preference can pass
/// [`DEFAULT_AZIMUTH_RANGE`](crate::constants::DEFAULT_AZIMUTH_RANGE) and
/// [`DEFAULT_ELEVATION_RANGE`](crate::constants::DEFAULT_ELEVATION_RANGE).
pub fn generate_sound_pos<R, D>(
    rng: &mut R,
    room: Vec3,
    micpos: Vec3,
    distances: &D,
    azimuth_range: Interval,
    elevation_range: Interval,
    max_try_times: usize,
) -> Result<Vec3, PositionNotFound>
where
    R: Rng + ?Sized,
    D: Distribution<f64> + ?Sized,
{
    SphericalSampler::new(azimuth_range, elevation_range, max_try_times).sample(
        rng,
        room,
        micpos,
        distances,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_AZIMUTH_RANGE, DEFAULT_ELEVATION_RANGE, DEFAULT_MAX_TRY_TIMES};
    use crate::distribution::{target_distance_table, UniformGrid};
    use crate::math::distance;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    fn default_sampler() -> SphericalSampler {
        SphericalSampler::new(
            DEFAULT_AZIMUTH_RANGE.into(),
            DEFAULT_ELEVATION_RANGE.into(),
            DEFAULT_MAX_TRY_TIMES,
        )
    }

    #[rstest]
    #[case(1)]
    #[case(7)]
    #[case(42)]
    fn accepted_positions_respect_clearance(#[case] seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let room = [8.0, 6.0, 4.0];
        let mic = [4.0, 3.0, 1.0];
        let table = target_distance_table();
        let sampler = default_sampler();
        for _ in 0..200 {
            if let Ok(pos) = sampler.sample(&mut rng, room, mic, &table) {
                for axis in 0..3 {
                    assert!(pos[axis] >= 0.5 && pos[axis] <= room[axis] - 0.5);
                }
                let r = distance(pos, mic);
                assert!(table.values().iter().any(|v| (v - r).abs() < 1e-9));
            }
        }
    }

    #[test]
    fn tiny_room_exhausts_attempts() {
        let mut rng = StdRng::seed_from_u64(42);
        let room = [1.1, 1.1, 1.1];
        let result = generate_sound_pos(
            &mut rng,
            room,
            [0.55, 0.55, 0.55],
            &target_distance_table(),
            DEFAULT_AZIMUTH_RANGE.into(),
            DEFAULT_ELEVATION_RANGE.into(),
            DEFAULT_MAX_TRY_TIMES,
        );
        assert_eq!(result, Err(PositionNotFound { attempts: 200 }));
    }

    #[test]
    fn zero_attempts_never_succeed() {
        let mut rng = StdRng::seed_from_u64(0);
        let sampler = SphericalSampler::new(
            DEFAULT_AZIMUTH_RANGE.into(),
            DEFAULT_ELEVATION_RANGE.into(),
            0,
        );
        let grid = UniformGrid::new(0.5, 1.0, 0.5).expect("one point");
        let result = sampler.sample(&mut rng, [10.0; 3], [5.0; 3], &grid);
        assert_eq!(result, Err(PositionNotFound { attempts: 0 }));
    }

    #[test]
    fn straight_up_lands_above_reference() {
        let mut rng = StdRng::seed_from_u64(5);
        let sampler = SphericalSampler::new(Interval::new(0.0, 0.0), Interval::new(90.0, 90.0), 1);
        let grid = UniformGrid::new(1.0, 1.5, 0.5).expect("one point");
        let pos = sampler
            .sample(&mut rng, [4.0, 4.0, 4.0], [2.0, 2.0, 1.0], &grid)
            .expect("position straight above the reference fits");
        approx::assert_abs_diff_eq!(pos[0], 2.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(pos[1], 2.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(pos[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn same_seed_same_position() {
        let table = target_distance_table();
        let sampler = default_sampler();
        let room = [6.0, 5.0, 3.0];
        let mic = [3.0, 2.5, 1.5];
        let a = sampler.sample(&mut StdRng::seed_from_u64(11), room, mic, &table);
        let b = sampler.sample(&mut StdRng::seed_from_u64(11), room, mic, &table);
        assert_eq!(a, b);
    }
}
