//! Prints the scenes of a small seeded run, skipping samples where a source did not fit.

use roomsim_params::{
    GeneratorConfig, Interval, NoiseRanges, ParameterGenerator, RoomRanges, TargetRanges,
};

fn main() {
    let config = GeneratorConfig {
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
    };

    let mut generator = ParameterGenerator::new(3, 42, config);
    for scene in &mut generator {
        let scene = match scene {
            Ok(scene) => scene,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        println!("{} target_source {}", "=".repeat(20), "=".repeat(20));
        println!("    {}", scene.target_source);
        println!("{} noise_sources {}", "=".repeat(20), "=".repeat(20));
        for noise in &scene.noise_sources {
            println!("    {noise}");
        }
    }
}
