#![allow(dead_code)]
/// in separate folder so its not ran as integration test
use roomsim_params::{
    GeneratorConfig, Interval, NoiseRanges, RoomRanges, SceneParameter, TargetRanges,
};

/// The setup the reference driver runs: default rooms, wide elevations for every source.
pub fn usage_config() -> GeneratorConfig {
    GeneratorConfig {
        room: RoomRanges {
            x: Interval::new(3.0, 10.0),
            y: Interval::new(3.0, 8.0),
            z: Interval::new(2.5, 6.0),
        },
        target: TargetRanges {
            azimuth: Interval::new(-180.0, 180.0),
            elevation: Interval::new(-30.0, 180.0),
        },
        noise: NoiseRanges {
            number: 3,
            azimuth: Interval::new(-180.0, 180.0),
            elevation: Interval::new(-30.0, 180.0),
        },
    }
}

/// Same as [`usage_config`] with every room axis fixed to `side` meters.
pub fn cube_room_config(side: f64) -> GeneratorConfig {
    let mut config = usage_config();
    config.room = RoomRanges {
        x: Interval::new(side, side),
        y: Interval::new(side, side),
        z: Interval::new(side, side),
    };
    config
}

pub fn assert_source_clear_of_walls(param: &SceneParameter) {
    let (room, source) = (param.room(), param.source());
    for axis in 0..3 {
        assert!(
            source[axis] >= 0.5 && source[axis] <= room[axis] - 0.5,
            "source {source:?} too close to the walls of {room:?}"
        );
    }
}

pub fn assert_mic_inside_room(param: &SceneParameter) {
    let (room, mic) = (param.room(), param.mic());
    for axis in 0..3 {
        assert!(
            mic[axis] >= 0.0 && mic[axis] <= room[axis],
            "microphone {mic:?} outside {room:?}"
        );
    }
}
