use osu_ppv2::{mods_from_str, mods_str, Mods};

#[test]
fn parse_is_case_insensitive_and_unordered() {
    assert_eq!(mods_from_str("HDHR"), u32::HD | u32::HR);
    assert_eq!(mods_from_str("hrhd"), u32::HD | u32::HR);
    assert_eq!(mods_from_str("EzHdDt"), u32::EZ | u32::HD | u32::DT);
}

#[test]
fn parse_ignores_unknown_acronyms() {
    assert_eq!(mods_from_str(""), 0);
    assert_eq!(mods_from_str("XYZ"), 0);
    assert_eq!(mods_from_str("hdXX"), u32::HD);
}

#[test]
fn render_follows_enumeration_order() {
    assert_eq!(mods_str(u32::HR | u32::HD), "HDHR");
    assert_eq!(mods_str(u32::DT | u32::EZ | u32::NF), "NFEZDT");
    assert_eq!(mods_str(0), "");
}

#[test]
fn roundtrip() {
    let mods = u32::HD | u32::DT | u32::FL;

    assert_eq!(mods_from_str(&mods_str(mods)), mods);
}

#[test]
fn speed_multipliers() {
    assert_eq!(0_u32.speed(), 1.0);
    assert_eq!(u32::DT.speed(), 1.5);
    assert_eq!(u32::NC.speed(), 1.5);
    assert_eq!(u32::HT.speed(), 0.75);
    // nonsensical but well-defined
    assert_eq!((u32::DT | u32::HT).speed(), 1.125);
}

#[test]
fn difficulty_multipliers() {
    assert_eq!(0_u32.od_ar_hp_multiplier(), 1.0);
    assert_eq!(u32::HR.od_ar_hp_multiplier(), 1.4);
    assert_eq!(u32::EZ.od_ar_hp_multiplier(), 0.5);
    assert_eq!((u32::HR | u32::EZ).od_ar_hp_multiplier(), 0.7);
}

#[test]
fn groupings() {
    assert!(u32::DT.change_speed());
    assert!(u32::HT.change_map());
    assert!(u32::HR.change_map());
    assert!(!u32::HR.change_speed());
    assert!(!(u32::HD | u32::FL).change_map());
}
