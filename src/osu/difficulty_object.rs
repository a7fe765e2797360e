use super::skill_kind::SINGLE_SPACING;

use crate::model::{HitObject, Pos2};

/// A [`HitObject`] paired with the precomputed values the strain pass needs.
pub(crate) struct DifficultyObject<'h> {
    pub(crate) base: &'h HitObject,
    /// Time since the previous object in ms, adjusted for the clock rate.
    pub(crate) delta: f64,
    /// Jump distance between the normalized positions of this
    /// and the previous object.
    pub(crate) dist: f64,
    /// Whether the object carries spacing information i.e. is a circle
    /// or a slider.
    pub(crate) positional: bool,
    /// Whether the spacing is wide enough to be perceived as a singletap.
    pub(crate) is_single: bool,
}

impl<'h> DifficultyObject<'h> {
    pub(crate) fn new(
        base: &'h HitObject,
        norm_pos: Pos2,
        prev_norm_pos: Pos2,
        prev_time: f64,
        speed_mul: f64,
    ) -> Self {
        let delta = (base.start_time - prev_time) / speed_mul;
        let dist = f64::from(norm_pos.distance(prev_norm_pos));
        let positional = base.is_circle() || base.is_slider();

        Self {
            base,
            delta,
            dist,
            positional,
            is_single: positional && dist > SINGLE_SPACING,
        }
    }
}
