use crate::Mods;

use std::collections::HashMap;

const OD0_MS: f64 = 79.5;
const OD10_MS: f64 = 19.5;
const AR0_MS: f64 = 1800.0;
const AR5_MS: f64 = 1200.0;
const AR10_MS: f64 = 450.0;

const OD_MS_STEP: f64 = 6.0;
const AR_MS_STEP1: f64 = 120.0;
const AR_MS_STEP2: f64 = 150.0;

/// Map stats after mods have been applied.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BeatmapStats {
    pub ar: f64,
    pub od: f64,
    pub cs: f64,
    pub hp: f64,
    pub speed_mul: f64,
}

impl BeatmapStats {
    #[inline]
    pub fn new(ar: f64, od: f64, cs: f64, hp: f64) -> Self {
        Self {
            ar,
            od,
            cs,
            hp,
            speed_mul: 1.0,
        }
    }

    /// Recalculate all stats with the given mods applied.
    ///
    /// Timing-sensitive stats (AR, OD) are converted to their millisecond
    /// window, scaled by the difficulty multiplier, clamped, squeezed by
    /// the clock rate, and converted back. Stats at zero stay zero.
    pub fn with_mods(mut self, mods: u32) -> Self {
        self.speed_mul = mods.speed();

        if !mods.change_map() {
            return self;
        }

        let od_ar_hp_multiplier = mods.od_ar_hp_multiplier();

        if self.ar > 0.0 {
            self.ar = modify_ar(self.ar, self.speed_mul, od_ar_hp_multiplier);
        }

        if self.od > 0.0 {
            self.od = modify_od(self.od, self.speed_mul, od_ar_hp_multiplier);
        }

        if self.cs > 0.0 {
            if mods.hr() {
                self.cs *= 1.3;
            }

            if mods.ez() {
                self.cs *= 0.5;
            }

            self.cs = self.cs.min(10.0);
        }

        if self.hp > 0.0 {
            self.hp = (self.hp * od_ar_hp_multiplier).min(10.0);
        }

        self
    }
}

/// Memoization of [`BeatmapStats::with_mods`] keyed by the mod bitmask.
///
/// Useful when the stats of the same map are needed for many scores,
/// e.g. when recalculating a leaderboard.
#[derive(Clone, Debug)]
pub struct StatsCache {
    base: BeatmapStats,
    cache: HashMap<u32, BeatmapStats>,
}

impl StatsCache {
    #[inline]
    pub fn new(base: BeatmapStats) -> Self {
        Self {
            base,
            cache: HashMap::new(),
        }
    }

    /// The base stats with the given mods applied, calculated at most
    /// once per bitmask.
    pub fn with_mods(&mut self, mods: u32) -> BeatmapStats {
        let base = self.base;

        *self
            .cache
            .entry(mods)
            .or_insert_with(|| base.with_mods(mods))
    }
}

fn modify_ar(base_ar: f64, speed_mul: f64, multiplier: f64) -> f64 {
    let mut ar = base_ar * multiplier;

    // the AR to ms curve is piecewise linear with a knee at AR 5
    let mut arms = if ar < 5.0 {
        AR0_MS - AR_MS_STEP1 * ar
    } else {
        AR5_MS - AR_MS_STEP2 * (ar - 5.0)
    };

    arms = arms.min(AR0_MS).max(AR10_MS);
    arms /= speed_mul;

    ar = if arms > AR5_MS {
        (AR0_MS - arms) / AR_MS_STEP1
    } else {
        5.0 + (AR5_MS - arms) / AR_MS_STEP2
    };

    ar
}

fn modify_od(base_od: f64, speed_mul: f64, multiplier: f64) -> f64 {
    let mut od = base_od * multiplier;
    let mut odms = OD0_MS - (OD_MS_STEP * od).ceil();

    odms = odms.min(OD0_MS).max(OD10_MS);
    odms /= speed_mul;

    od = (OD0_MS - odms) / OD_MS_STEP;

    od
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mods;

    fn assert_close(value: f64, expected: f64) {
        assert!(
            (value - expected).abs() < 1e-9,
            "expected {} but was {}",
            expected,
            value
        );
    }

    #[test]
    fn nomod_passthrough() {
        let stats = BeatmapStats::new(9.0, 8.0, 4.0, 6.0).with_mods(0);

        assert_close(stats.ar, 9.0);
        assert_close(stats.od, 8.0);
        assert_close(stats.cs, 4.0);
        assert_close(stats.hp, 6.0);
        assert_close(stats.speed_mul, 1.0);
    }

    #[test]
    fn double_time() {
        let stats = BeatmapStats::new(5.0, 5.0, 4.0, 6.0).with_mods(u32::DT);

        assert_close(stats.speed_mul, 1.5);
        assert_close(stats.ar, 23.0 / 3.0);
        assert_close(stats.od, 7.75);
        assert_close(stats.cs, 4.0);
        assert_close(stats.hp, 6.0);
    }

    #[test]
    fn hard_rock() {
        let stats = BeatmapStats::new(8.0, 8.0, 4.0, 6.0).with_mods(u32::HR);

        assert_close(stats.ar, 10.0);
        assert_close(stats.cs, 5.2);
        assert_close(stats.hp, 8.4);
    }

    #[test]
    fn easy_half_time() {
        let stats = BeatmapStats::new(8.0, 8.0, 4.0, 6.0).with_mods(u32::EZ | u32::HT);

        assert_close(stats.speed_mul, 0.75);
        assert_close(stats.cs, 2.0);
        assert_close(stats.hp, 3.0);
        // AR 4 is 1320ms, stretched to 1760ms, back past the knee
        assert_close(stats.ar, 1.0 / 3.0);
    }

    #[test]
    fn cache_returns_same_stats() {
        let base = BeatmapStats::new(9.0, 8.0, 4.0, 6.0);
        let mut cache = StatsCache::new(base);

        let first = cache.with_mods(u32::HR | u32::DT);
        let second = cache.with_mods(u32::HR | u32::DT);

        assert_eq!(first, second);
        assert_eq!(first, base.with_mods(u32::HR | u32::DT));
    }

    #[test]
    fn zero_stays_zero() {
        let stats = BeatmapStats::new(0.0, 0.0, 0.0, 0.0).with_mods(u32::HR | u32::DT);

        assert_close(stats.ar, 0.0);
        assert_close(stats.od, 0.0);
        assert_close(stats.cs, 0.0);
        assert_close(stats.hp, 0.0);
    }
}
