use super::{Accuracy, BeatmapStats, OsuDifficultyAttributes, OsuStars};

use crate::model::Beatmap;
use crate::{CalculateError, CalculateResult, Mods};

use std::fmt;

/// Performance calculator for osu!standard scores.
///
/// Works either on a [`Beatmap`] (difficulty is calculated on the fly
/// unless attributes of a previous calculation are provided) or on raw
/// values for when no parsed map is at hand.
///
/// # Example
///
/// ```no_run
/// # use osu_ppv2::{model::Beatmap, Mods, OsuPP};
/// # fn main() -> Result<(), osu_ppv2::CalculateError> {
/// # let map = Beatmap::default();
/// let result = OsuPP::new(&map)
///     .mods(u32::HD | u32::DT)
///     .combo(1234)
///     .misses(1)
///     .accuracy(98.5)
///     .calculate()?;
///
/// println!("{}", result);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct OsuPP<'m> {
    map: Option<&'m Beatmap>,
    attributes: Option<OsuDifficultyAttributes>,

    mods: u32,
    combo: Option<u32>,
    n300: Option<u32>,
    n100: u32,
    n50: u32,
    n_misses: u32,
    acc_percent: Option<f64>,
    score_version: u32,

    // inputs for the map-less path
    aim_stars: Option<f64>,
    speed_stars: Option<f64>,
    max_combo: Option<u32>,
    n_circles: Option<u32>,
    n_sliders: Option<u32>,
    n_objects: Option<u32>,
    base_ar: Option<f64>,
    base_od: Option<f64>,
}

impl Default for OsuPP<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            map: None,
            attributes: None,

            mods: 0,
            combo: None,
            n300: None,
            n100: 0,
            n50: 0,
            n_misses: 0,
            acc_percent: None,
            score_version: 1,

            aim_stars: None,
            speed_stars: None,
            max_combo: None,
            n_circles: None,
            n_sliders: None,
            n_objects: None,
            base_ar: None,
            base_od: None,
        }
    }
}

impl<'m> OsuPP<'m> {
    #[inline]
    pub fn new(map: &'m Beatmap) -> Self {
        Self {
            map: Some(map),
            ..Default::default()
        }
    }

    /// Calculate from raw values instead of a map.
    ///
    /// Requires [`aim_stars`], [`speed_stars`], [`max_combo`],
    /// [`n_circles`], [`n_sliders`], and [`n_objects`] to be set;
    /// AR and OD default to 5.
    ///
    /// [`aim_stars`]: Self::aim_stars
    /// [`speed_stars`]: Self::speed_stars
    /// [`max_combo`]: Self::max_combo
    /// [`n_circles`]: Self::n_circles
    /// [`n_sliders`]: Self::n_sliders
    /// [`n_objects`]: Self::n_objects
    #[inline]
    pub fn raw() -> Self {
        Self::default()
    }

    /// Provide the result of a previous difficulty calculation.
    ///
    /// The attributes carry their own mods which take priority over
    /// anything given through [`mods`](Self::mods).
    #[inline]
    pub fn attributes(mut self, attributes: impl OsuAttributeProvider) -> Self {
        if let Some(attributes) = attributes.attributes() {
            self.attributes = Some(attributes);
        }

        self
    }

    #[inline]
    pub fn mods(mut self, mods: u32) -> Self {
        self.mods = mods;

        self
    }

    /// Highest combo of the score, defaults to `max_combo - misses`.
    #[inline]
    pub fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    #[inline]
    pub fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    #[inline]
    pub fn n100(mut self, n100: u32) -> Self {
        self.n100 = n100;

        self
    }

    #[inline]
    pub fn n50(mut self, n50: u32) -> Self {
        self.n50 = n50;

        self
    }

    #[inline]
    pub fn misses(mut self, n_misses: u32) -> Self {
        self.n_misses = n_misses;

        self
    }

    /// Specify the accuracy of the score in percent, e.g. `98.5`.
    ///
    /// Takes priority over directly given hit counts; the counts are
    /// approximated to get as close as possible to this value.
    #[inline]
    pub fn accuracy(mut self, acc_percent: f64) -> Self {
        self.acc_percent = Some(acc_percent);

        self
    }

    /// Defaults to 1; score v2 treats every object like a circle
    /// for accuracy pp.
    #[inline]
    pub fn score_version(mut self, version: u32) -> Self {
        self.score_version = version;

        self
    }

    #[inline]
    pub fn aim_stars(mut self, stars: f64) -> Self {
        self.aim_stars = Some(stars);

        self
    }

    #[inline]
    pub fn speed_stars(mut self, stars: f64) -> Self {
        self.speed_stars = Some(stars);

        self
    }

    #[inline]
    pub fn max_combo(mut self, max_combo: u32) -> Self {
        self.max_combo = Some(max_combo);

        self
    }

    #[inline]
    pub fn n_circles(mut self, n_circles: u32) -> Self {
        self.n_circles = Some(n_circles);

        self
    }

    #[inline]
    pub fn n_sliders(mut self, n_sliders: u32) -> Self {
        self.n_sliders = Some(n_sliders);

        self
    }

    #[inline]
    pub fn n_objects(mut self, n_objects: u32) -> Self {
        self.n_objects = Some(n_objects);

        self
    }

    #[inline]
    pub fn ar(mut self, ar: f64) -> Self {
        self.base_ar = Some(ar);

        self
    }

    #[inline]
    pub fn od(mut self, od: f64) -> Self {
        self.base_od = Some(od);

        self
    }

    pub fn calculate(self) -> CalculateResult<OsuPerformanceAttributes> {
        if self.score_version != 1 && self.score_version != 2 {
            return Err(CalculateError::UnsupportedScoreVersion(self.score_version));
        }

        // resolve the difficulty, either given, calculated, or raw
        let n_misses = self.n_misses;

        let (attributes, stats) = if let Some(attributes) = self.attributes {
            let stats = BeatmapStats {
                ar: attributes.ar,
                od: attributes.od,
                cs: attributes.cs,
                hp: attributes.hp,
                speed_mul: attributes.mods.speed(),
            };

            (attributes, stats)
        } else if let Some(map) = self.map {
            super::ensure_std(map)?;

            let attributes = OsuStars::new(map).mods(self.mods).calculate();
            let stats = BeatmapStats {
                ar: attributes.ar,
                od: attributes.od,
                cs: attributes.cs,
                hp: attributes.hp,
                speed_mul: attributes.mods.speed(),
            };

            (attributes, stats)
        } else {
            let max_combo = self
                .max_combo
                .ok_or(CalculateError::MissingInput("max_combo"))?;

            if max_combo == 0 {
                return Err(CalculateError::InvalidInput("max_combo must be > 0"));
            }

            let n_circles = self
                .n_circles
                .ok_or(CalculateError::MissingInput("n_circles"))?;
            let n_sliders = self
                .n_sliders
                .ok_or(CalculateError::MissingInput("n_sliders"))?;
            let n_objects = self
                .n_objects
                .ok_or(CalculateError::MissingInput("n_objects"))?;

            if n_objects < n_circles + n_sliders {
                return Err(CalculateError::InvalidInput(
                    "n_objects must be >= n_circles + n_sliders",
                ));
            }

            let aim_strain = self
                .aim_stars
                .ok_or(CalculateError::MissingInput("aim_stars"))?;
            let speed_strain = self
                .speed_stars
                .ok_or(CalculateError::MissingInput("speed_stars"))?;

            let stats = BeatmapStats::new(
                self.base_ar.unwrap_or(5.0),
                self.base_od.unwrap_or(5.0),
                0.0,
                0.0,
            )
            .with_mods(self.mods);

            let attributes = OsuDifficultyAttributes {
                stars: aim_strain
                    + speed_strain
                    + (speed_strain - aim_strain).abs() * super::EXTREME_SCALING_FACTOR,
                aim_strain,
                speed_strain,
                ar: stats.ar,
                od: stats.od,
                cs: stats.cs,
                hp: stats.hp,
                n_circles,
                n_sliders,
                n_spinners: n_objects - n_circles - n_sliders,
                max_combo,
                mods: self.mods,
                ..Default::default()
            };

            (attributes, stats)
        };

        let mods = attributes.mods;
        let max_combo = attributes.max_combo;
        let n_objects = attributes.n_objects();

        let accuracy = match self.acc_percent {
            Some(acc_percent) => Accuracy::from_percent(n_objects, acc_percent, self.n_misses),
            None => Accuracy::from_hits(n_objects, self.n300, self.n100, self.n50, self.n_misses),
        };

        let combo = self
            .combo
            .unwrap_or_else(|| max_combo.saturating_sub(n_misses));

        // common values used by all three pp parts

        let n_objects_over_2k = f64::from(n_objects) / 2000.0;
        let mut length_bonus = 0.95 + 0.4 * n_objects_over_2k.min(1.0);

        if n_objects > 2000 {
            length_bonus += n_objects_over_2k.log10() * 0.5;
        }

        let miss_penalty = 0.97_f64.powi(self.n_misses as i32);

        let combo_break = if max_combo > 0 {
            (f64::from(combo) / f64::from(max_combo)).powf(0.8)
        } else {
            1.0
        };

        let acc_value = accuracy.value();

        let mut ar_bonus = 1.0;

        if stats.ar > 10.33 {
            ar_bonus += 0.45 * (stats.ar - 10.33);
        } else if stats.ar < 8.0 {
            let mut low_ar_bonus = 0.01 * (8.0 - stats.ar);

            if mods.hd() {
                low_ar_bonus *= 2.0;
            }

            ar_bonus += low_ar_bonus;
        }

        let acc_bonus = 0.5 + acc_value / 2.0;
        let od_bonus = 0.98 + stats.od * stats.od / 2500.0;

        // aim pp

        let mut pp_aim = base_pp(attributes.aim_strain);
        pp_aim *= length_bonus;
        pp_aim *= miss_penalty;
        pp_aim *= combo_break;
        pp_aim *= ar_bonus;

        if mods.hd() {
            pp_aim *= 1.18;
        }

        if mods.fl() {
            pp_aim *= 1.45 * length_bonus;
        }

        pp_aim *= acc_bonus;
        pp_aim *= od_bonus;

        // speed pp

        let mut pp_speed = base_pp(attributes.speed_strain);
        pp_speed *= length_bonus;
        pp_speed *= miss_penalty;
        pp_speed *= combo_break;
        pp_speed *= acc_bonus;
        pp_speed *= od_bonus;

        // acc pp
        //
        // score v1 ignores sliders and spinners since they are free 300s

        let (real_acc, n_circles) = match self.score_version {
            1 => {
                let n_spinners = attributes.n_spinners;

                let real_acc = Accuracy {
                    n300: accuracy
                        .n300
                        .saturating_sub(attributes.n_sliders + n_spinners),
                    ..accuracy
                }
                .value();

                (real_acc, attributes.n_circles)
            }
            _ => (acc_value, n_objects),
        };

        let mut pp_acc =
            1.52163_f64.powf(stats.od) * real_acc.powf(24.0) * 2.83;

        pp_acc *= (f64::from(n_circles) / 1000.0).powf(0.3).min(1.15);

        if mods.hd() {
            pp_acc *= 1.02;
        }

        if mods.fl() {
            pp_acc *= 1.02;
        }

        // total pp

        let mut final_multiplier = 1.12;

        if mods.nf() {
            final_multiplier *= 0.90;
        }

        if mods.so() {
            final_multiplier *= 0.95;
        }

        let pp = (pp_aim.powf(1.1) + pp_speed.powf(1.1) + pp_acc.powf(1.1)).powf(1.0 / 1.1)
            * final_multiplier;

        Ok(OsuPerformanceAttributes {
            difficulty: attributes,
            pp,
            pp_aim,
            pp_speed,
            pp_acc,
            accuracy,
        })
    }
}

#[inline]
fn base_pp(stars: f64) -> f64 {
    (5.0 * (stars / 0.0675).max(1.0) - 4.0).powi(3) / 100_000.0
}

/// The result of a performance calculation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OsuPerformanceAttributes {
    /// The difficulty attributes the calculation was based on.
    pub difficulty: OsuDifficultyAttributes,

    /// The final performance points.
    pub pp: f64,
    pub pp_aim: f64,
    pub pp_speed: f64,
    pub pp_acc: f64,

    /// The hit counts the calculation used; approximated when the score
    /// was given as an accuracy percent.
    pub accuracy: Accuracy,
}

impl OsuPerformanceAttributes {
    #[inline]
    pub fn stars(&self) -> f64 {
        self.difficulty.stars
    }
}

impl fmt::Display for OsuPerformanceAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} pp ({:.2} aim, {:.2} speed, {:.2} acc)",
            self.pp, self.pp_aim, self.pp_speed, self.pp_acc
        )
    }
}

/// Abstract type to provide the result of a previous difficulty
/// calculation to [`OsuPP`].
pub trait OsuAttributeProvider {
    fn attributes(self) -> Option<OsuDifficultyAttributes>;
}

impl OsuAttributeProvider for OsuDifficultyAttributes {
    #[inline]
    fn attributes(self) -> Option<OsuDifficultyAttributes> {
        Some(self)
    }
}

impl OsuAttributeProvider for OsuPerformanceAttributes {
    #[inline]
    fn attributes(self) -> Option<OsuDifficultyAttributes> {
        Some(self.difficulty)
    }
}
