use std::fmt;

/// Hit counts of a score, or an approximation of them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Accuracy {
    pub n300: u32,
    pub n100: u32,
    pub n50: u32,
    pub n_misses: u32,
}

impl Accuracy {
    /// Build from raw hit counts.
    ///
    /// If `n300` is `None` it is inferred so that the counts add up
    /// to `n_objects`.
    pub fn from_hits(n_objects: u32, n300: Option<u32>, n100: u32, n50: u32, n_misses: u32) -> Self {
        let n300 = n300.unwrap_or_else(|| n_objects.saturating_sub(n100 + n50 + n_misses));

        Self {
            n300,
            n100,
            n50,
            n_misses,
        }
    }

    /// Approximate the hit counts of a score with the given accuracy percent.
    ///
    /// Prefers 100s over 50s; only once the 100 count alone can't drag the
    /// accuracy down far enough are 50s distributed.
    pub fn from_percent(n_objects: u32, mut acc_percent: f64, n_misses: u32) -> Self {
        let n_misses = n_misses.min(n_objects);
        let max300 = n_objects - n_misses;

        let max_acc = Self {
            n300: max300,
            n100: 0,
            n50: 0,
            n_misses,
        }
        .value()
            * 100.0;

        acc_percent = acc_percent.max(0.0).min(max_acc);

        let n = f64::from(n_objects);
        let misses = f64::from(n_misses);

        // just some black magic deriving the counts from the accuracy formula
        let mut n100 = round_clamped(-3.0 * ((acc_percent * 0.01 - 1.0) * n + misses) * 0.5);
        let mut n50 = 0;

        if n100 > max300 {
            n100 = 0;
            n50 = round_clamped(-6.0 * ((acc_percent * 0.01 - 1.0) * n + misses) * 0.5).min(max300);
        }

        let n300 = n_objects - n100 - n50 - n_misses;

        Self {
            n300,
            n100,
            n50,
            n_misses,
        }
    }

    #[inline]
    pub fn total_hits(&self) -> u32 {
        self.n300 + self.n100 + self.n50 + self.n_misses
    }

    /// Accuracy rounded the same way the game client does, in `0.0..=1.0`.
    pub fn value(&self) -> f64 {
        let total_hits = self.total_hits();

        if total_hits == 0 {
            return 1.0;
        }

        let acc = f64::from(self.n50 + self.n100 * 2 + self.n300 * 6)
            / (6.0 * f64::from(total_hits));

        acc.max(0.0).min(1.0)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% {}x100 {}x50 {}xmiss",
            self.value() * 100.0,
            self.n100,
            self.n50,
            self.n_misses
        )
    }
}

/// `Math.round` of JS; ties round up and negatives clamp to zero.
#[inline]
fn round_clamped(value: f64) -> u32 {
    (value + 0.5).floor().max(0.0) as u32
}
