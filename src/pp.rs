use crate::model::Beatmap;
use crate::osu::{OsuPerformanceAttributes, OsuPP};
use crate::{ensure_std, CalculateResult};

use std::fmt;

/// Performance calculator that dispatches on the map's mode.
#[derive(Clone, Debug)]
pub enum AnyPP<'m> {
    Osu(OsuPP<'m>),
}

impl<'m> AnyPP<'m> {
    #[inline]
    pub fn new(map: &'m Beatmap) -> CalculateResult<Self> {
        ensure_std(map)?;

        Ok(Self::Osu(OsuPP::new(map)))
    }

    #[inline]
    pub fn mods(self, mods: u32) -> Self {
        match self {
            Self::Osu(calculator) => Self::Osu(calculator.mods(mods)),
        }
    }

    #[inline]
    pub fn combo(self, combo: u32) -> Self {
        match self {
            Self::Osu(calculator) => Self::Osu(calculator.combo(combo)),
        }
    }

    #[inline]
    pub fn misses(self, n_misses: u32) -> Self {
        match self {
            Self::Osu(calculator) => Self::Osu(calculator.misses(n_misses)),
        }
    }

    #[inline]
    pub fn accuracy(self, acc_percent: f64) -> Self {
        match self {
            Self::Osu(calculator) => Self::Osu(calculator.accuracy(acc_percent)),
        }
    }

    #[inline]
    pub fn calculate(self) -> CalculateResult<PerformanceAttributes> {
        match self {
            Self::Osu(calculator) => calculator.calculate().map(PerformanceAttributes::Osu),
        }
    }
}

/// The result of a performance calculation, dispatched on the map's mode.
#[derive(Clone, Debug, PartialEq)]
pub enum PerformanceAttributes {
    Osu(OsuPerformanceAttributes),
}

impl PerformanceAttributes {
    /// The final performance points.
    #[inline]
    pub fn pp(&self) -> f64 {
        match self {
            Self::Osu(attributes) => attributes.pp,
        }
    }

    #[inline]
    pub fn stars(&self) -> f64 {
        match self {
            Self::Osu(attributes) => attributes.stars(),
        }
    }
}

impl fmt::Display for PerformanceAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Osu(attributes) => fmt::Display::fmt(attributes, f),
        }
    }
}
