//! The in-memory beatmap representation all calculators consume.
//!
//! Building these structures from an `.osu` file is the job of an external
//! parser; everything in here is read-only once constructed.

mod control_point;
mod hit_object;
mod pos2;

pub use control_point::TimingPoint;
pub use hit_object::{HitObject, HitObjectKind};
pub use pos2::Pos2;

/// The mode of a [`Beatmap`].
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum GameMode {
    STD = 0,
    TKO = 1,
    CTB = 2,
    MNA = 3,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::STD
    }
}

/// Partial beatmap with just enough data for difficulty and pp calculation.
///
/// Hit objects and timing points are expected in ascending order of time;
/// the calculators rely on that ordering and never re-sort.
#[derive(Clone, Default, Debug)]
pub struct Beatmap {
    pub mode: GameMode,
    /// The `.osu` format version.
    pub version: u8,

    pub n_circles: u32,
    pub n_sliders: u32,
    pub n_spinners: u32,

    pub ar: f32,
    pub od: f32,
    pub cs: f32,
    pub hp: f32,
    /// Base slider velocity multiplier.
    pub sv: f32,
    pub tick_rate: f32,

    pub hit_objects: Vec<HitObject>,
    pub timing_points: Vec<TimingPoint>,
}

impl Beatmap {
    /// Approximate the map's max combo.
    ///
    /// Circles and spinners contribute one combo each, sliders contribute
    /// head, tail, repeats, and ticks. Ticks are estimated by dividing the
    /// total distance travelled by the playfield pixels per beat of the
    /// active timing section.
    pub fn max_combo(&self) -> u32 {
        let mut combo = self.n_circles + self.n_spinners;

        let base_px_per_beat = f64::from(self.sv) * 100.0;
        let mut px_per_beat = base_px_per_beat;
        let mut points = self.timing_points.iter().peekable();
        let mut first_point = true;

        for h in self.hit_objects.iter() {
            let (pixel_len, repeats) = match h.kind {
                HitObjectKind::Slider { pixel_len, repeats } => (pixel_len, repeats),
                _ => continue,
            };

            // advance to the timing point active at the slider's start;
            // the first point applies from the beginning of the map
            while let Some(point) = points.peek() {
                if !first_point && h.start_time < point.time {
                    break;
                }

                first_point = false;

                let sv_multiplier = if !point.change && point.beat_len < 0.0 {
                    -100.0 / point.beat_len
                } else {
                    1.0
                };

                // old formats don't apply the multiplier to slider ticks
                px_per_beat = if self.version >= 8 {
                    base_px_per_beat * sv_multiplier
                } else {
                    base_px_per_beat
                };

                points.next();
            }

            let spans = repeats as f64;
            let beats = pixel_len * spans / px_per_beat;

            // the epsilon prevents accidental ceiling of whole beat counts
            // that picked up rounding errors
            let mut ticks = ((beats - 0.1) / spans * f64::from(self.tick_rate)).ceil() as i64 - 1;
            ticks *= repeats as i64;
            ticks += repeats as i64 + 1;

            combo += ticks.max(0) as u32;
        }

        combo
    }
}
