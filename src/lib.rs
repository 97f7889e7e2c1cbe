//! Random room acoustic scenes for room impulse response simulation.
//!
//! Training far-field speech recognition needs many utterances as they would sound in real
//! rooms. This crate draws the geometric and acoustic parameters of such rooms: the room
//! extent, where the microphone sits, where the talker and the noise sources stand and how
//! reverberant the room is. A separate room impulse response renderer turns each
//! [`SceneParameter`] into audio filters; nothing here simulates sound propagation.
//!
//! Scenes come from a [`ParameterGenerator`]:
//!
//! ```rust
//! use roomsim_params::{GeneratorConfig, Interval, ParameterGenerator};
//!
//! let mut config = GeneratorConfig::default();
//! config.target.elevation = Interval::new(-30.0, 180.0);
//!
//! let mut generator = ParameterGenerator::new(3, 42, config);
//! for scene in &mut generator {
//!     let Ok(scene) = scene else {
//!         // A source could not be placed, move on to the next sample.
//!         continue;
//!     };
//!     println!("target:\n{}", scene.target_source);
//!     for noise in &scene.noise_sources {
//!         println!("noise:\n{noise}");
//!     }
//! }
//! ```
//!
//! # How sources are placed
//!
//! Sources are placed relative to the microphone: an azimuth, an elevation and a radius are
//! drawn, converted to a cartesian offset and added to the microphone position. Candidates
//! closer than [`WALL_CLEARANCE`](constants::WALL_CLEARANCE) to any wall are rejected and
//! redrawn, up to a fixed number of attempts, see [`sampler`]. Running out of attempts is a
//! normal outcome, reported as [`PositionNotFound`] and, for a whole sample, as a
//! [`SceneError`].
//!
//! Target radii and reverberation times follow empirical tables, see [`distribution`].
//!
//! # Optional features
//!
//! - `tracing`: emit `tracing` events when sources cannot be placed.
//! - `serde`: (de)serialize [`GeneratorConfig`], [`SceneParameter`] and [`Scene`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

mod common;
mod config;
mod generator;
mod parameter;

pub mod constants;
pub mod distribution;
pub mod math;
pub mod sampler;

pub use crate::config::{GeneratorConfig, Interval, NoiseRanges, RoomRanges, TargetRanges};
pub use crate::generator::{ParameterGenerator, Samples, Scene, SceneError};
pub use crate::parameter::SceneParameter;
pub use crate::sampler::{generate_sound_pos, PositionNotFound, SphericalSampler};
