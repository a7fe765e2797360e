//! Difficulty and performance calculation for osu!standard, implementing
//! the classic ppv2 algorithm.
//!
//! Maps are expected as already-parsed [`Beatmap`](model::Beatmap) values;
//! building those from `.osu` files is left to an external parser.
//!
//! # Examples
//!
//! ```
//! use osu_ppv2::{model::*, Mods, OsuPP, OsuStars};
//!
//! # fn main() -> Result<(), osu_ppv2::CalculateError> {
//! let map = Beatmap {
//!     n_circles: 2,
//!     ar: 9.0,
//!     od: 8.5,
//!     cs: 4.0,
//!     hp: 5.0,
//!     sv: 1.4,
//!     tick_rate: 1.0,
//!     hit_objects: vec![
//!         HitObject {
//!             pos: Pos2 { x: 100.0, y: 100.0 },
//!             start_time: 500.0,
//!             kind: HitObjectKind::Circle,
//!         },
//!         HitObject {
//!             pos: Pos2 { x: 300.0, y: 150.0 },
//!             start_time: 1000.0,
//!             kind: HitObjectKind::Circle,
//!         },
//!     ],
//!     ..Default::default()
//! };
//!
//! // difficulty alone
//! let difficulty = OsuStars::new(&map).mods(u32::HD | u32::DT).calculate();
//! println!("{}", difficulty);
//!
//! // pp for a 99% play, reusing the difficulty calculation
//! let performance = OsuPP::new(&map)
//!     .attributes(difficulty)
//!     .accuracy(99.0)
//!     .calculate()?;
//! println!("{}", performance);
//! # Ok(()) }
//! ```

mod error;
mod mods;
mod pp;
mod stars;

pub mod model;
pub mod osu;

pub use error::{CalculateError, CalculateResult};
pub use mods::{mods_from_str, mods_str, Mods};
pub use pp::{AnyPP, PerformanceAttributes};
pub use stars::{AnyStars, DifficultyAttributes};

pub use osu::{
    Accuracy, BeatmapStats, OsuAttributeProvider, OsuDifficultyAttributes,
    OsuPerformanceAttributes, OsuPP, OsuStars, StatsCache,
};

pub use model::{Beatmap, GameMode};

pub(crate) use osu::ensure_std;
