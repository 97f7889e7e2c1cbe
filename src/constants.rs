//! Common constants for scene generation

/// Minimum distance (meters) between any sampled source and a room wall.
///
/// Doubles as the step of the noise-distance grid.
pub const WALL_CLEARANCE: f64 = 0.5;

/// Attempts the spherical sampler makes before giving up on a position.
pub const DEFAULT_MAX_TRY_TIMES: usize = 200;

/// Lower bound (meters) of the noise source distance grid.
pub const NOISE_DISTANCE_MIN: f64 = 0.5;

/// Upper bound (meters, exclusive) of the noise source distance grid.
pub const NOISE_DISTANCE_MAX: f64 = 7.5;

/// Spacing (meters) between points of the noise source distance grid.
pub const NOISE_DISTANCE_STEP: f64 = WALL_CLEARANCE;

/// Azimuth range (degrees) used when the caller does not pick one.
pub const DEFAULT_AZIMUTH_RANGE: [f64; 2] = [-180.0, 180.0];

/// Elevation range (degrees) used when the caller does not pick one.
pub const DEFAULT_ELEVATION_RANGE: [f64; 2] = [45.0, 135.0];

/// Elevation range (degrees) the reference setup uses for noise sources.
pub const DEFAULT_NOISE_ELEVATION_RANGE: [f64; 2] = [-30.0, 180.0];

/// Noise sources generated per sample by the default configuration.
pub const DEFAULT_NOISE_SOURCES: usize = 3;
