use std::fmt;

use crate::math::{distance, Vec3, ORIGIN};

/// Room, microphone, source and reverberation time describing one source in a simulated room.
///
/// A renderer turns this into a room impulse response from `source` to `mic`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneParameter {
    room: Vec3,
    mic: Vec3,
    source: Vec3,
    t60: f64,
}

impl SceneParameter {
    /// Bundles a room extent, microphone position, source position and T60 (seconds).
    pub fn new(room: Vec3, mic: Vec3, source: Vec3, t60: f64) -> Self {
        Self {
            room,
            mic,
            source,
            t60,
        }
    }

    /// Width, depth and height of the room in meters.
    #[inline]
    pub fn room(&self) -> Vec3 {
        self.room
    }

    /// Microphone position.
    #[inline]
    pub fn mic(&self) -> Vec3 {
        self.mic
    }

    /// Sound source position.
    #[inline]
    pub fn source(&self) -> Vec3 {
        self.source
    }

    /// Reverberation time in seconds.
    #[inline]
    pub fn t60(&self) -> f64 {
        self.t60
    }

    /// Distance between the sound source and the microphone.
    pub fn distance(&self) -> f64 {
        distance(self.mic, self.source)
    }

    /// Distance between the microphone and the room's origin corner.
    ///
    /// Bounds the distances noise sources are drawn from. Note this is not the distance to the
    /// farthest corner: a microphone close to the origin gets a small bound even in a large
    /// room.
    pub fn max_distance(&self) -> f64 {
        distance(self.mic, ORIGIN)
    }

    /// Length of the room's main diagonal, from the origin corner to the opposite one.
    pub fn room_diagonal(&self) -> f64 {
        distance(self.room, ORIGIN)
    }
}

impl fmt::Display for SceneParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tRoom={:?}", self.room)?;
        writeln!(f, "\tMicPos={:?}", self.mic)?;
        writeln!(f, "\tSoundPos={:?}", self.source)?;
        writeln!(f, "\tT60={}", self.t60)?;
        writeln!(f, "\tDistance={}", self.distance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn example() -> SceneParameter {
        SceneParameter::new([6.0, 5.0, 3.0], [3.0, 4.0, 0.0], [1.0, 2.0, 1.0], 0.4)
    }

    #[test]
    fn distances() {
        let p = example();
        assert_eq!(p.distance(), 3.0);
        assert_eq!(p.max_distance(), 5.0);
        assert_abs_diff_eq!(p.room_diagonal(), 70f64.sqrt());
    }

    #[test]
    fn display_lists_every_field() {
        let text = example().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "\tRoom=[6.0, 5.0, 3.0]",
                "\tMicPos=[3.0, 4.0, 0.0]",
                "\tSoundPos=[1.0, 2.0, 1.0]",
                "\tT60=0.4",
                "\tDistance=3",
            ]
        );
    }
}
