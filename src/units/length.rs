use super::Unit;

const fn unit(name: &'static str, inches: f64, aliases: &'static [&'static str]) -> Unit {
    Unit {
        name,
        factor: inches,
        aliases,
    }
}

/// 길이 단위 테이블. 기준 단위는 인치이며 factor는 단위당 인치 수이다.
pub static LENGTH_UNITS: &[Unit] = &[
    unit("Inch", 1.0, &["in"]),
    unit("Foot", 12.0, &["ft", "feet"]),
    unit("Yard", 36.0, &["yd"]),
    unit("Mile", 63_360.0, &["mi"]),
    unit("Stick", 2.0, &[]),
    unit("Hand", 4.0, &[]),
    unit("Nautical Mile", 72_960.0, &["nmi"]),
    unit("League", 218_880.0, &[]),
    unit("Palm", 3.0, &[]),
    unit("Span", 9.0, &[]),
    unit("Cubit", 18.0, &[]),
    unit("Link", 18.0, &[]),
    unit("Shaftment", 6.0, &[]),
    unit("Pace", 30.0, &[]),
    unit("Grade", 60.0, &[]),
    unit("Step", 60.0, &[]),
    unit("Rope", 240.0, &[]),
    unit("Ramsden's Chain", 1_200.0, &[]),
    unit("Roman mile", 60_000.0, &[]),
    unit("Ell", 45.0, &[]),
    unit("Skein", 4_320.0, &[]),
    unit("Spindle", 518_400.0, &[]),
    unit("Rod", 198.0, &[]),
    unit("Pole", 198.0, &[]),
    unit("Perch", 198.0, &[]),
    unit("Gunters chain", 792.0, &[]),
    unit("Furlong", 7_920.0, &[]),
    unit("Fathom", 72.0, &[]),
    unit("Shackle", 1_080.0, &[]),
    unit("Cable", 7_200.0, &[]),
];
