use super::Unit;

/// 1 kg 당 파운드 수.
pub const POUNDS_PER_KILOGRAM: f64 = 2.204_622_62;
/// 1 kg 당 스톤 수.
pub const STONES_PER_KILOGRAM: f64 = 0.157_473_04;

/// 질량 단위 테이블. 내부 기준은 kg이다.
pub static MASS_UNITS: &[Unit] = &[
    Unit {
        name: "Kilograms",
        factor: 1.0,
        aliases: &["kg", "kilogram"],
    },
    Unit {
        name: "Pounds",
        factor: 1.0 / POUNDS_PER_KILOGRAM,
        aliases: &["lbs", "lb", "pound"],
    },
    Unit {
        name: "Stones",
        factor: 1.0 / STONES_PER_KILOGRAM,
        aliases: &["st", "stone"],
    },
];
