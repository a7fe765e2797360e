/// Spacing past which the speed skill considers a note singletappable.
pub(crate) const SINGLE_SPACING: f64 = 125.0;
const STREAM_SPACING: f64 = 110.0;
const ALMOST_DIAMETER: f64 = 90.0;

const AIM_STRAIN_DECAY_BASE: f64 = 0.15;
const AIM_WEIGHT_SCALING: f64 = 26.25;

const SPEED_STRAIN_DECAY_BASE: f64 = 0.3;
const SPEED_WEIGHT_SCALING: f64 = 1400.0;

/// The two skill dimensions strain is accumulated for.
#[derive(Copy, Clone, Debug)]
pub(crate) enum SkillKind {
    Aim,
    Speed,
}

impl SkillKind {
    /// Decay of the strain accumulator per second without a new note.
    ///
    /// Speed decays faster so that sparse sections don't keep feeding it.
    #[inline]
    pub(crate) fn strain_decay_base(self) -> f64 {
        match self {
            Self::Aim => AIM_STRAIN_DECAY_BASE,
            Self::Speed => SPEED_STRAIN_DECAY_BASE,
        }
    }

    #[inline]
    pub(crate) fn weight_scaling(self) -> f64 {
        match self {
            Self::Aim => AIM_WEIGHT_SCALING,
            Self::Speed => SPEED_WEIGHT_SCALING,
        }
    }

    /// Response of the skill to the jump distance between two notes.
    pub(crate) fn spacing_weight(self, distance: f64) -> f64 {
        match self {
            Self::Aim => distance.powf(0.99),
            Self::Speed => {
                if distance > SINGLE_SPACING {
                    2.5
                } else if distance > STREAM_SPACING {
                    1.6 + 0.9 * (distance - STREAM_SPACING) / (SINGLE_SPACING - STREAM_SPACING)
                } else if distance > ALMOST_DIAMETER {
                    1.2 + 0.4 * (distance - ALMOST_DIAMETER) / (STREAM_SPACING - ALMOST_DIAMETER)
                } else if distance > ALMOST_DIAMETER / 2.0 {
                    0.95 + 0.25 * (distance - ALMOST_DIAMETER / 2.0) / (ALMOST_DIAMETER / 2.0)
                } else {
                    0.95
                }
            }
        }
    }
}
