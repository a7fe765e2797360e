use super::Pos2;

/// A single hit object, created by the external beatmap parser.
///
/// Only the data required for difficulty and pp calculation is kept.
/// Positions are in playfield coordinates (512x384 rect).
#[derive(Clone, Debug, PartialEq)]
pub struct HitObject {
    pub pos: Pos2,
    /// Start time in milliseconds.
    pub start_time: f64,
    pub kind: HitObjectKind,
}

impl HitObject {
    #[inline]
    pub fn is_circle(&self) -> bool {
        matches!(self.kind, HitObjectKind::Circle)
    }

    #[inline]
    pub fn is_slider(&self) -> bool {
        matches!(self.kind, HitObjectKind::Slider { .. })
    }

    #[inline]
    pub fn is_spinner(&self) -> bool {
        matches!(self.kind, HitObjectKind::Spinner)
    }
}

/// Data specific to the object's type.
#[derive(Clone, Debug, PartialEq)]
pub enum HitObjectKind {
    Circle,
    /// `pixel_len` is the distance travelled in a single span;
    /// `repeats` is the span count where one span means no repeats.
    Slider { pixel_len: f64, repeats: usize },
    Spinner,
    /// osu!mania hold note; carries no meaning in osu!standard.
    Hold,
}
