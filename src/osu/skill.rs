use super::{DifficultyObject, SkillKind};

use std::cmp::Ordering;

const DECAY_WEIGHT: f64 = 0.9;

/// Strain accumulator for a single skill dimension.
///
/// The map is analyzed in fixed-length sections; each completed section
/// contributes its highest strain to `strain_peaks`, which is later
/// collapsed into a weighted sum much like scores on a player profile.
pub(crate) struct Skill {
    kind: SkillKind,

    current_strain: f64,
    current_section_peak: f64,
    pub(crate) strain_peaks: Vec<f64>,

    prev_time: Option<f64>,
}

impl Skill {
    #[inline]
    pub(crate) fn new(kind: SkillKind) -> Self {
        Self {
            kind,

            current_strain: 0.0,
            current_section_peak: 0.0,
            strain_peaks: Vec::with_capacity(128),

            prev_time: None,
        }
    }

    #[inline]
    pub(crate) fn save_current_peak(&mut self) {
        self.strain_peaks.push(self.current_section_peak);
    }

    /// Seed the next section's peak by decaying the last processed strain
    /// forward to the section's start instead of resetting to zero.
    #[inline]
    pub(crate) fn start_new_section_from(&mut self, time: f64) {
        self.current_section_peak = match self.prev_time {
            Some(prev_time) => self.current_strain * self.strain_decay(time - prev_time),
            None => 0.0,
        };
    }

    pub(crate) fn process(&mut self, current: &DifficultyObject<'_>) {
        self.current_strain *= self.strain_decay(current.delta);

        if current.positional {
            self.current_strain += self.kind.spacing_weight(current.dist)
                * self.kind.weight_scaling()
                / current.delta.max(50.0);
        }

        self.current_section_peak = self.current_section_peak.max(self.current_strain);
        self.prev_time = Some(current.base.start_time);
    }

    /// Weighted sum over the sorted section peaks; consistently hard maps
    /// are rewarded over maps with a single hard spike.
    pub(crate) fn difficulty_value(&mut self) -> f64 {
        let mut difficulty = 0.0;
        let mut weight = 1.0;

        self.strain_peaks
            .sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

        for &strain in self.strain_peaks.iter() {
            difficulty += strain * weight;
            weight *= DECAY_WEIGHT;
        }

        difficulty
    }

    #[inline]
    fn strain_decay(&self, ms: f64) -> f64 {
        self.kind.strain_decay_base().powf(ms / 1000.0)
    }
}
