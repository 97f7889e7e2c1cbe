use rand::{Rng, RngExt};

use crate::constants::{
    DEFAULT_AZIMUTH_RANGE, DEFAULT_ELEVATION_RANGE, DEFAULT_NOISE_ELEVATION_RANGE,
    DEFAULT_NOISE_SOURCES,
};
use crate::math::to_radians;

/// A closed `[min, max]` range of reals.
///
/// Serialized as a two element array so configuration files read `x: [3, 10]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Interval {
    /// Lower end.
    pub min: f64,
    /// Upper end.
    pub max: f64,
}

impl Interval {
    /// Creates the range `[min, max]`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Draws a value as `min + (max - min) * u` with `u` uniform in `[0, 1)`.
    ///
    /// Never fails: a degenerate range yields `min`, an inverted one yields values in
    /// `(max, min]`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.random();
        self.min + (self.max - self.min) * u
    }

    /// Converts a range in degrees to radians.
    pub fn to_radians(self) -> Self {
        Self::new(to_radians(self.min), to_radians(self.max))
    }
}

impl From<[f64; 2]> for Interval {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::new(min, max)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.min, interval.max]
    }
}

/// Ranges (meters) the room extent is drawn from, one per axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomRanges {
    /// Width.
    pub x: Interval,
    /// Depth.
    pub y: Interval,
    /// Height.
    pub z: Interval,
}

impl Default for RoomRanges {
    /// Width between 3 and 10 meters, depth between 3 and 8 meters and height between 2.5 and
    /// 6 meters.
    fn default() -> Self {
        Self {
            x: Interval::new(3.0, 10.0),
            y: Interval::new(3.0, 8.0),
            z: Interval::new(2.5, 6.0),
        }
    }
}

/// Angular ranges (degrees) for the target source around the microphone.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetRanges {
    /// Azimuth range.
    pub azimuth: Interval,
    /// Elevation range.
    pub elevation: Interval,
}

impl Default for TargetRanges {
    fn default() -> Self {
        Self {
            azimuth: DEFAULT_AZIMUTH_RANGE.into(),
            elevation: DEFAULT_ELEVATION_RANGE.into(),
        }
    }
}

/// Count and angular ranges (degrees) for the noise sources around the microphone.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseRanges {
    /// Noise sources generated per sample.
    pub number: usize,
    /// Azimuth range.
    pub azimuth: Interval,
    /// Elevation range.
    pub elevation: Interval,
}

impl Default for NoiseRanges {
    fn default() -> Self {
        Self {
            number: DEFAULT_NOISE_SOURCES,
            azimuth: DEFAULT_AZIMUTH_RANGE.into(),
            elevation: DEFAULT_NOISE_ELEVATION_RANGE.into(),
        }
    }
}

/// Everything a [`ParameterGenerator`](crate::ParameterGenerator) draws scenes from.
///
/// The default reproduces the setup used to simulate far-field utterances for smart speakers.
///
/// ```rust
/// use roomsim_params::{GeneratorConfig, Interval};
///
/// let mut config = GeneratorConfig::default();
/// config.target.elevation = Interval::new(-30.0, 180.0);
/// config.noise.number = 1;
/// assert_eq!(config.room.x, Interval::new(3.0, 10.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Room extent ranges.
    pub room: RoomRanges,
    /// Target source ranges.
    pub target: TargetRanges,
    /// Noise source ranges.
    pub noise: NoiseRanges,
}
