#![allow(dead_code)]

use osu_ppv2::model::{Beatmap, HitObject, HitObjectKind, Pos2, TimingPoint};

pub fn circle(x: f32, y: f32, start_time: f64) -> HitObject {
    HitObject {
        pos: Pos2 { x, y },
        start_time,
        kind: HitObjectKind::Circle,
    }
}

pub fn slider(x: f32, y: f32, start_time: f64, pixel_len: f64, repeats: usize) -> HitObject {
    HitObject {
        pos: Pos2 { x, y },
        start_time,
        kind: HitObjectKind::Slider { pixel_len, repeats },
    }
}

pub fn spinner(start_time: f64) -> HitObject {
    HitObject {
        pos: Pos2::zero(),
        start_time,
        kind: HitObjectKind::Spinner,
    }
}

pub fn hold(x: f32, y: f32, start_time: f64) -> HitObject {
    HitObject {
        pos: Pos2 { x, y },
        start_time,
        kind: HitObjectKind::Hold,
    }
}

pub fn timing_point(time: f64, beat_len: f64, change: bool) -> TimingPoint {
    TimingPoint {
        time,
        beat_len,
        change,
    }
}

/// Build a map with neutral settings around the given objects;
/// the object counts are derived from the kinds.
pub fn map_of(hit_objects: Vec<HitObject>) -> Beatmap {
    let n_circles = hit_objects.iter().filter(|h| h.is_circle()).count() as u32;
    let n_sliders = hit_objects.iter().filter(|h| h.is_slider()).count() as u32;
    let n_spinners = hit_objects.iter().filter(|h| h.is_spinner()).count() as u32;

    Beatmap {
        version: 14,
        n_circles,
        n_sliders,
        n_spinners,
        ar: 5.0,
        od: 5.0,
        cs: 5.0,
        hp: 5.0,
        sv: 1.0,
        tick_rate: 1.0,
        hit_objects,
        ..Default::default()
    }
}

pub fn assert_margin(actual: f64, expected: f64, margin: f64) {
    assert!(
        (actual - expected).abs() <= margin,
        "expected {} but was {} (margin {})",
        expected,
        actual,
        margin
    );
}

/// Assert a relative deviation, `margin` being e.g. `0.01` for 1%.
pub fn assert_relative(actual: f64, expected: f64, margin: f64) {
    let deviation = (actual - expected).abs() / expected.abs();

    assert!(
        deviation <= margin,
        "expected {} but was {} (deviation {:.4}, allowed {})",
        expected,
        actual,
        deviation,
        margin
    );
}
