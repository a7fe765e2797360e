use crate::model::Beatmap;
use crate::osu::{OsuDifficultyAttributes, OsuStars};
use crate::{ensure_std, CalculateResult};

use std::fmt;

/// Difficulty calculator that dispatches on the map's mode.
///
/// Only osu!standard has a registered calculator; other modes are
/// rejected when the calculator is created.
#[derive(Clone, Debug)]
pub enum AnyStars<'m> {
    Osu(OsuStars<'m>),
}

impl<'m> AnyStars<'m> {
    #[inline]
    pub fn new(map: &'m Beatmap) -> CalculateResult<Self> {
        ensure_std(map)?;

        Ok(Self::Osu(OsuStars::new(map)))
    }

    #[inline]
    pub fn mods(self, mods: u32) -> Self {
        match self {
            Self::Osu(calculator) => Self::Osu(calculator.mods(mods)),
        }
    }

    #[inline]
    pub fn calculate(self) -> DifficultyAttributes {
        match self {
            Self::Osu(calculator) => DifficultyAttributes::Osu(calculator.calculate()),
        }
    }
}

/// The result of a difficulty calculation, dispatched on the map's mode.
#[derive(Clone, Debug, PartialEq)]
pub enum DifficultyAttributes {
    Osu(OsuDifficultyAttributes),
}

impl DifficultyAttributes {
    /// The final star value.
    #[inline]
    pub fn stars(&self) -> f64 {
        match self {
            Self::Osu(attributes) => attributes.stars,
        }
    }

    #[inline]
    pub fn max_combo(&self) -> u32 {
        match self {
            Self::Osu(attributes) => attributes.max_combo,
        }
    }
}

impl fmt::Display for DifficultyAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Osu(attributes) => fmt::Display::fmt(attributes, f),
        }
    }
}
