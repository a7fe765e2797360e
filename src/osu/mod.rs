//! osu!standard difficulty and pp calculation.
//!
//! Everything in here implements the classic ppv2 algorithm; sliders only
//! contribute their head position so slider velocity never affects strain.

mod accuracy;
mod difficulty_object;
mod pp;
mod skill;
mod skill_kind;
mod stats;

pub use accuracy::Accuracy;
pub use pp::{OsuAttributeProvider, OsuPerformanceAttributes, OsuPP};
pub use stats::{BeatmapStats, StatsCache};

use difficulty_object::DifficultyObject;
use skill::Skill;
use skill_kind::SkillKind;

use crate::model::{Beatmap, GameMode, Pos2};
use crate::{CalculateError, CalculateResult, Mods};

use std::fmt;

const SECTION_LEN: f64 = 400.0;
const STAR_SCALING_FACTOR: f64 = 0.0675;
const EXTREME_SCALING_FACTOR: f64 = 0.5;

const PLAYFIELD_WIDTH: f32 = 512.0;
const PLAYFIELD_CENTER: Pos2 = Pos2 { x: 256.0, y: 192.0 };
const CIRCLESIZE_BUFF_THRESHOLD: f32 = 30.0;
const NORMALIZED_RADIUS: f32 = 52.0;

/// 1/2 note interval at 240 BPM, in milliseconds.
const DEFAULT_SINGLETAP_THRESHOLD: f64 = 125.0;

/// Difficulty calculator for osu!standard maps.
///
/// # Example
///
/// ```no_run
/// # use osu_ppv2::{model::Beatmap, Mods, OsuStars};
/// # let map = Beatmap::default();
/// let attributes = OsuStars::new(&map).mods(u32::HD | u32::DT).calculate();
/// println!("{}", attributes);
/// ```
#[derive(Clone, Debug)]
pub struct OsuStars<'m> {
    map: &'m Beatmap,
    mods: u32,
    singletap_threshold: f64,
}

impl<'m> OsuStars<'m> {
    #[inline]
    pub fn new(map: &'m Beatmap) -> Self {
        Self {
            map,
            mods: 0,
            singletap_threshold: DEFAULT_SINGLETAP_THRESHOLD,
        }
    }

    #[inline]
    pub fn mods(mut self, mods: u32) -> Self {
        self.mods = mods;

        self
    }

    /// Interval in milliseconds below which consecutive notes are
    /// considered too fast to singletap.
    #[inline]
    pub fn singletap_threshold(mut self, threshold: f64) -> Self {
        self.singletap_threshold = threshold;

        self
    }

    pub fn calculate(self) -> OsuDifficultyAttributes {
        stars(self.map, self.mods, self.singletap_threshold)
    }
}

/// Normalize positions on the circle radius so that strain can be
/// calculated as if every map had the same circle size.
fn scaling_factor(cs: f32) -> f32 {
    let radius = (PLAYFIELD_WIDTH / 16.0) * (1.0 - 0.7 * (cs - 5.0) / 5.0);
    let mut scaling_factor = NORMALIZED_RADIUS / radius;

    // small circle bonus
    if radius < CIRCLESIZE_BUFF_THRESHOLD {
        scaling_factor *= 1.0 + (CIRCLESIZE_BUFF_THRESHOLD - radius).min(5.0) / 50.0;
    }

    scaling_factor
}

fn stars(map: &Beatmap, mods: u32, singletap_threshold: f64) -> OsuDifficultyAttributes {
    let stats = BeatmapStats::new(
        f64::from(map.ar),
        f64::from(map.od),
        f64::from(map.cs),
        f64::from(map.hp),
    )
    .with_mods(mods);

    let mut attributes = OsuDifficultyAttributes {
        ar: stats.ar,
        od: stats.od,
        cs: stats.cs,
        hp: stats.hp,
        n_circles: map.n_circles,
        n_sliders: map.n_sliders,
        n_spinners: map.n_spinners,
        max_combo: map.max_combo(),
        mods,
        ..Default::default()
    };

    if map.hit_objects.is_empty() {
        return attributes;
    }

    let scale = scaling_factor(stats.cs as f32);
    let norm_center = PLAYFIELD_CENTER * scale;

    let norm_positions: Vec<Pos2> = map
        .hit_objects
        .iter()
        .map(|h| {
            if h.is_spinner() {
                norm_center
            } else if h.is_circle() || h.is_slider() {
                h.pos * scale
            } else {
                log::warn!("unknown object kind {:?}, substituting origin", h.kind);

                Pos2::zero()
            }
        })
        .collect();

    let speed_mul = stats.speed_mul;
    let section_len = SECTION_LEN * speed_mul;

    let mut aim = Skill::new(SkillKind::Aim);
    let mut speed = Skill::new(SkillKind::Speed);

    // interval_end is not aligned to the first object; early objects can
    // produce empty leading sections
    let mut interval_end = section_len;

    while map.hit_objects[0].start_time > interval_end {
        aim.save_current_peak();
        aim.start_new_section_from(interval_end);

        speed.save_current_peak();
        speed.start_new_section_from(interval_end);

        interval_end += section_len;
    }

    let mut diff_objects = Vec::with_capacity(map.hit_objects.len().saturating_sub(1));

    for (i, h) in map.hit_objects.iter().enumerate().skip(1) {
        let diff_object = DifficultyObject::new(
            h,
            norm_positions[i],
            norm_positions[i - 1],
            map.hit_objects[i - 1].start_time,
            speed_mul,
        );

        while h.start_time > interval_end {
            aim.save_current_peak();
            aim.start_new_section_from(interval_end);

            speed.save_current_peak();
            speed.start_new_section_from(interval_end);

            interval_end += section_len;
        }

        aim.process(&diff_object);
        speed.process(&diff_object);

        diff_objects.push(diff_object);
    }

    // the last partial section is intentionally not flushed

    let mut aim_strain = aim.difficulty_value().sqrt() * STAR_SCALING_FACTOR;
    let speed_strain = speed.difficulty_value().sqrt() * STAR_SCALING_FACTOR;

    if mods.td() {
        aim_strain = aim_strain.powf(0.8);
    }

    // mixed so that heavily aim or speed focused maps get a bonus
    let stars = aim_strain
        + speed_strain
        + (speed_strain - aim_strain).abs() * EXTREME_SCALING_FACTOR;

    let mut n_singles = 0;
    let mut n_singles_threshold = 0;

    for diff_object in diff_objects.iter() {
        if diff_object.is_single {
            n_singles += 1;
        }

        if diff_object.positional && diff_object.delta >= singletap_threshold {
            n_singles_threshold += 1;
        }
    }

    attributes.aim_strain = aim_strain;
    attributes.speed_strain = speed_strain;
    attributes.stars = stars;
    attributes.n_singles = n_singles;
    attributes.n_singles_threshold = n_singles_threshold;

    attributes
}

/// Various data about the difficulty of an osu!standard map.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OsuDifficultyAttributes {
    pub stars: f64,
    pub aim_strain: f64,
    pub speed_strain: f64,

    pub ar: f64,
    pub od: f64,
    pub cs: f64,
    pub hp: f64,

    pub n_circles: u32,
    pub n_sliders: u32,
    pub n_spinners: u32,
    pub max_combo: u32,

    /// Amount of notes that are seen as singletaps by the difficulty
    /// calculator based on their spacing.
    pub n_singles: u32,
    /// Amount of notes whose interval to the previous note is at least
    /// the singletap threshold.
    pub n_singles_threshold: u32,

    pub mods: u32,
}

impl OsuDifficultyAttributes {
    #[inline]
    pub fn n_objects(&self) -> u32 {
        self.n_circles + self.n_sliders + self.n_spinners
    }
}

impl fmt::Display for OsuDifficultyAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} stars ({:.2} aim, {:.2} speed)",
            self.stars, self.aim_strain, self.speed_strain
        )
    }
}

/// Shortcut for checking that a map is an osu!standard map.
pub(crate) fn ensure_std(map: &Beatmap) -> CalculateResult<()> {
    match map.mode {
        GameMode::STD => Ok(()),
        other => Err(CalculateError::UnsupportedMode(other)),
    }
}
