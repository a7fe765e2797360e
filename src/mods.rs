macro_rules! impl_mods {
    ($func_name:ident, $const_name:ident) => {
        #[inline]
        fn $func_name(self) -> bool {
            self & Self::$const_name > 0
        }
    };
}

/// Mod bitmask as defined by the osu!api.
///
/// Note that `TD` (touch device) doubles as the legacy no-video bit.
pub trait Mods: Copy {
    const NF: u32 = 1 << 0;
    const EZ: u32 = 1 << 1;
    const TD: u32 = 1 << 2;
    const HD: u32 = 1 << 3;
    const HR: u32 = 1 << 4;
    const DT: u32 = 1 << 6;
    const HT: u32 = 1 << 8;
    const NC: u32 = 1 << 9;
    const FL: u32 = 1 << 10;
    const SO: u32 = 1 << 12;

    fn change_speed(self) -> bool;
    fn change_map(self) -> bool;
    fn speed(self) -> f64;
    fn od_ar_hp_multiplier(self) -> f64;
    fn nf(self) -> bool;
    fn ez(self) -> bool;
    fn td(self) -> bool;
    fn hd(self) -> bool;
    fn hr(self) -> bool;
    fn dt(self) -> bool;
    fn ht(self) -> bool;
    fn nc(self) -> bool;
    fn fl(self) -> bool;
    fn so(self) -> bool;
}

impl Mods for u32 {
    #[inline]
    fn change_speed(self) -> bool {
        self & (Self::DT | Self::HT | Self::NC) > 0
    }

    #[inline]
    fn change_map(self) -> bool {
        self & (Self::HR | Self::EZ) > 0 || self.change_speed()
    }

    #[inline]
    fn speed(self) -> f64 {
        let mut speed = 1.0;

        if self & (Self::DT | Self::NC) > 0 {
            speed = 1.5;
        }

        if self & Self::HT > 0 {
            speed *= 0.75;
        }

        speed
    }

    #[inline]
    fn od_ar_hp_multiplier(self) -> f64 {
        let mut multiplier = 1.0;

        if self & Self::HR > 0 {
            multiplier = 1.4;
        }

        if self & Self::EZ > 0 {
            multiplier *= 0.5;
        }

        multiplier
    }

    impl_mods!(nf, NF);
    impl_mods!(ez, EZ);
    impl_mods!(td, TD);
    impl_mods!(hd, HD);
    impl_mods!(hr, HR);
    impl_mods!(dt, DT);
    impl_mods!(ht, HT);
    impl_mods!(nc, NC);
    impl_mods!(fl, FL);
    impl_mods!(so, SO);
}

const ACRONYMS: [(&str, u32); 10] = [
    ("nf", <u32 as Mods>::NF),
    ("ez", <u32 as Mods>::EZ),
    ("td", <u32 as Mods>::TD),
    ("hd", <u32 as Mods>::HD),
    ("hr", <u32 as Mods>::HR),
    ("dt", <u32 as Mods>::DT),
    ("ht", <u32 as Mods>::HT),
    ("nc", <u32 as Mods>::NC),
    ("fl", <u32 as Mods>::FL),
    ("so", <u32 as Mods>::SO),
];

/// Construct the mod bitmask from a string such as `"HDHR"`.
///
/// Matching is case-insensitive and order-independent;
/// anything that is not a known two-letter acronym is ignored.
pub fn mods_from_str(s: &str) -> u32 {
    let s = s.to_lowercase();

    ACRONYMS
        .iter()
        .filter(|(acronym, _)| s.contains(acronym))
        .fold(0, |mods, (_, bit)| mods | bit)
}

/// Convert a mod bitmask into a string such as `"HDHR"`.
pub fn mods_str(mods: u32) -> String {
    ACRONYMS
        .iter()
        .filter(|(_, bit)| mods & bit > 0)
        .map(|(acronym, _)| acronym.to_uppercase())
        .collect()
}
