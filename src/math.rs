//! Small 3-vector helpers for positions in a room.

/// A point or offset in room coordinates, in meters.
pub type Vec3 = [f64; 3];

/// Origin corner of every room.
pub const ORIGIN: Vec3 = [0.0; 3];

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * std::f64::consts::PI
}

/// Converts spherical coordinates (radians, meters) to a cartesian offset.
///
/// `x = r cos(elevation) cos(azimuth)`, `y = r cos(elevation) sin(azimuth)`
/// and `z = r sin(elevation)`. The mapping is applied as is for any angle,
/// elevations beyond ±90° included.
#[inline]
pub fn spherical_to_cartesian(azimuth: f64, elevation: f64, radius: f64) -> Vec3 {
    [
        radius * elevation.cos() * azimuth.cos(),
        radius * elevation.cos() * azimuth.sin(),
        radius * elevation.sin(),
    ]
}

/// Component-wise sum.
#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    let d = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
    (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
}

/// Whether every coordinate of `point` lies in `[margin, room - margin]`.
#[inline]
pub fn inside_with_margin(point: Vec3, room: Vec3, margin: f64) -> bool {
    point
        .iter()
        .zip(room.iter())
        .all(|(&p, &extent)| p >= margin && p <= extent - margin)
}
