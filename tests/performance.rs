mod common;

use common::*;

use osu_ppv2::model::GameMode;
use osu_ppv2::{AnyPP, CalculateError, Mods, OsuPP, OsuStars};

// aim 2.09* / speed 2.19* on a 336 object map, the values the
// classic algorithm is usually documented with
fn reference_score() -> OsuPP<'static> {
    OsuPP::raw()
        .aim_stars(2.09)
        .speed_stars(2.19)
        .max_combo(469)
        .n_circles(262)
        .n_sliders(69)
        .n_objects(336)
        .ar(5.0)
        .od(8.0)
}

#[test]
fn reference_ss() {
    let result = reference_score().accuracy(100.0).calculate().unwrap();

    // the published stars only carry two decimals so the margin is loose
    assert_relative(result.pp, 133.24, 0.015);
    assert_relative(result.pp_aim, 36.23, 0.015);
    assert_relative(result.pp_speed, 40.61, 0.015);
    assert_relative(result.pp_acc, 54.42, 0.015);
    assert_eq!(result.accuracy.n300, 336);
}

#[test]
fn reference_hddt() {
    let result = reference_score()
        .aim_stars(2.92)
        .speed_stars(3.11)
        .mods(u32::HD | u32::DT)
        .accuracy(98.0)
        .combo(400)
        .misses(1)
        .calculate()
        .unwrap();

    assert_relative(result.pp, 266.01, 0.015);
    assert_relative(result.pp_aim, 99.70, 0.015);
    assert_relative(result.pp_speed, 101.68, 0.015);
    assert_relative(result.pp_acc, 60.41, 0.015);

    assert_eq!(result.accuracy.n300, 326);
    assert_eq!(result.accuracy.to_string(), "97.92% 9x100 0x50 1xmiss");
}

#[test]
fn more_misses_never_gain_pp() {
    let mut previous = f64::INFINITY;

    for n_misses in 0..10 {
        let result = reference_score()
            .accuracy(98.0)
            .misses(n_misses)
            .combo(300)
            .calculate()
            .unwrap();

        assert!(
            result.pp <= previous,
            "pp gained with {} misses: {} -> {}",
            n_misses,
            previous,
            result.pp
        );

        previous = result.pp;
    }
}

#[test]
fn no_fail_discounts_total_only() {
    let clean = reference_score().accuracy(100.0).calculate().unwrap();
    let no_fail = reference_score()
        .mods(u32::NF)
        .accuracy(100.0)
        .calculate()
        .unwrap();

    assert_relative(no_fail.pp, clean.pp * 0.90, 1e-10);
    assert_relative(no_fail.pp_aim, clean.pp_aim, 1e-10);
}

#[test]
fn spun_out_discount() {
    let clean = reference_score().accuracy(100.0).calculate().unwrap();
    let spun_out = reference_score()
        .mods(u32::SO)
        .accuracy(100.0)
        .calculate()
        .unwrap();

    assert_relative(spun_out.pp, clean.pp * 0.95, 1e-10);
}

#[test]
fn score_v2_judges_every_object() {
    // on an imperfect score v2 punishes acc pp harder since sliders
    // and spinners are no longer free 300s
    let v1 = reference_score()
        .accuracy(95.0)
        .calculate()
        .unwrap();
    let v2 = reference_score()
        .accuracy(95.0)
        .score_version(2)
        .calculate()
        .unwrap();

    assert!(v1.pp_acc != v2.pp_acc);
    assert_relative(v1.pp_aim, v2.pp_aim, 1e-10);
}

#[test]
fn unsupported_score_version() {
    match reference_score().score_version(3).calculate() {
        Err(CalculateError::UnsupportedScoreVersion(3)) => {}
        other => panic!("expected UnsupportedScoreVersion, got {:?}", other),
    }
}

#[test]
fn raw_path_requires_combo_and_counts() {
    match OsuPP::raw().calculate() {
        Err(CalculateError::MissingInput("max_combo")) => {}
        other => panic!("expected MissingInput, got {:?}", other),
    }

    match OsuPP::raw()
        .max_combo(100)
        .n_circles(80)
        .n_sliders(30)
        .n_objects(100)
        .calculate()
    {
        Err(CalculateError::InvalidInput(_)) => {}
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn map_path_matches_attribute_path() {
    let map = map_of(vec![
        circle(0.0, 0.0, 0.0),
        circle(100.0, 0.0, 1000.0),
        circle(200.0, 0.0, 2000.0),
    ]);

    let from_map = OsuPP::new(&map).accuracy(100.0).calculate().unwrap();

    let attributes = OsuStars::new(&map).calculate();
    let from_attributes = OsuPP::raw()
        .attributes(attributes)
        .accuracy(100.0)
        .calculate()
        .unwrap();

    assert_relative(from_map.pp, from_attributes.pp, 1e-10);
}

#[test]
fn hit_counts_instead_of_percent() {
    let by_counts = reference_score()
        .n100(9)
        .misses(1)
        .calculate()
        .unwrap();
    let by_percent = reference_score()
        .accuracy(98.0)
        .misses(1)
        .calculate()
        .unwrap();

    assert_eq!(by_counts.accuracy, by_percent.accuracy);
    assert_relative(by_counts.pp, by_percent.pp, 1e-10);
}

#[test]
fn display() {
    let result = reference_score().accuracy(100.0).calculate().unwrap();
    let rendered = result.to_string();

    assert!(rendered.ends_with(" acc)"), "unexpected format: {}", rendered);
    assert!(rendered.contains(" pp ("), "unexpected format: {}", rendered);
}

#[test]
fn dispatch_rejects_other_modes() {
    let mut map = map_of(vec![circle(0.0, 0.0, 0.0)]);
    map.mode = GameMode::CTB;

    match AnyPP::new(&map) {
        Err(CalculateError::UnsupportedMode(GameMode::CTB)) => {}
        other => panic!("expected UnsupportedMode error, got {:?}", other),
    }
}

#[test]
fn dispatch_std() {
    let map = map_of(vec![
        circle(0.0, 0.0, 0.0),
        circle(100.0, 0.0, 1000.0),
        circle(200.0, 0.0, 2000.0),
    ]);

    let result = AnyPP::new(&map)
        .unwrap()
        .accuracy(100.0)
        .calculate()
        .unwrap();

    assert!(result.pp() > 0.0);
    assert_margin(result.stars(), 0.3416412, 1e-4);
}
