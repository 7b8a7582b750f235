//! 길이/질량 변환 회귀 테스트.
use unit_converter_toolbox::conversion::{
    convert, convert_units, ConversionError, ConversionRequest, Selection,
};
use unit_converter_toolbox::{find_unit, list_units, UnitKind};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn twelve_inches_is_one_foot() {
    let ft = convert(UnitKind::Length, 12.0, "Inch", "Foot").expect("convert");
    assert!(close(ft, 1.0), "got {ft}");
}

#[test]
fn ten_pounds_in_kilograms() {
    let kg = convert(UnitKind::Mass, 10.0, "Pounds", "Kilograms").expect("convert");
    assert!((kg - 4.5359).abs() < 1e-4, "got {kg}");
}

#[test]
fn stones_use_declared_factor() {
    // 1 kg = 0.15747304 st
    let st = convert(UnitKind::Mass, 1.0, "kg", "st").expect("convert");
    assert!(close(st, 0.157_473_04), "got {st}");
}

#[test]
fn identity_for_every_unit() {
    for kind in UnitKind::ALL {
        for unit in list_units(kind) {
            let v = convert_units(3.7, unit, unit).expect("convert");
            assert!(close(v, 3.7), "{} -> {v}", unit.name);
        }
    }
}

#[test]
fn round_trip_and_transitivity() {
    for kind in UnitKind::ALL {
        let units = list_units(kind);
        for a in units {
            for b in units {
                let there = convert_units(42.5, a, b).expect("a->b");
                let back = convert_units(there, b, a).expect("b->a");
                assert!(close(back, 42.5), "{} <-> {}: {back}", a.name, b.name);
                for c in units.iter().step_by(5) {
                    let direct = convert_units(42.5, a, c).expect("a->c");
                    let via = convert_units(there, b, c).expect("b->c");
                    assert!(close(direct, via), "{} -> {} -> {}", a.name, b.name, c.name);
                }
            }
        }
    }
}

#[test]
fn zero_and_negative_values_are_invalid() {
    for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = convert(UnitKind::Length, value, "Inch", "Foot").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidValue(_)), "{value}: {err:?}");
    }
    // 값 검증이 단위 조회보다 먼저다
    let err = convert(UnitKind::Mass, -1.0, "Unknown", "Nope").unwrap_err();
    assert!(matches!(err, ConversionError::InvalidValue(_)));
}

#[test]
fn unknown_unit_is_reported_with_kind() {
    let err = convert(UnitKind::Length, 5.0, "Unknown", "Foot").unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownUnit {
            kind: UnitKind::Length,
            name: "Unknown".to_string()
        }
    );
    // 다른 kind의 단위는 찾을 수 없다
    let err = convert(UnitKind::Mass, 5.0, "Foot", "kg").unwrap_err();
    assert!(matches!(err, ConversionError::UnknownUnit { .. }));
}

#[test]
fn missing_selection_is_distinct_from_unknown() {
    let err = ConversionRequest::new(UnitKind::Length, 1.0)
        .to_unit("Foot")
        .evaluate()
        .unwrap_err();
    assert_eq!(err, ConversionError::MissingUnitSelection(Selection::Source));

    let err = convert(UnitKind::Length, 1.0, "Inch", "  ").unwrap_err();
    assert_eq!(err, ConversionError::MissingUnitSelection(Selection::Target));
}

#[test]
fn lookup_is_case_insensitive_and_accepts_aliases() {
    let a = find_unit(UnitKind::Length, "nautical mile").expect("name");
    let b = find_unit(UnitKind::Length, "NMI").expect("alias");
    assert_eq!(a, b);
    assert_eq!(find_unit(UnitKind::Mass, " lbs ").expect("alias").name, "Pounds");
}

#[test]
fn very_large_and_small_values_are_accepted() {
    let v = convert(UnitKind::Length, 1e300, "Inch", "Inch").expect("large");
    assert!(close(v, 1e300));
    let v = convert(UnitKind::Length, 1e-300, "Mile", "Inch").expect("small");
    assert!(v > 0.0);
}

#[test]
fn length_table_order_is_stable() {
    let names: Vec<&str> = list_units(UnitKind::Length).iter().map(|u| u.name).collect();
    assert_eq!(&names[..4], &["Inch", "Foot", "Yard", "Mile"]);
    assert_eq!(names.len(), 30);
    assert_eq!(names.last(), Some(&"Cable"));
}

#[test]
fn kind_strings_parse_and_keep_rejected_text() {
    assert_eq!("length".parse::<UnitKind>(), Ok(UnitKind::Length));
    assert_eq!(" MASS ".parse::<UnitKind>(), Ok(UnitKind::Mass));
    assert_eq!("len".parse::<UnitKind>(), Ok(UnitKind::Length));
    assert_eq!("weight".parse::<UnitKind>(), Ok(UnitKind::Mass));
    assert_eq!(
        " Volume ".parse::<UnitKind>(),
        Err(ConversionError::UnknownKind("Volume".to_string()))
    );
}

#[test]
fn results_outside_f64_range_saturate() {
    // 기준 단위 환산 중 넘치면 무한대, 너무 작으면 0
    let v = convert(UnitKind::Length, 1e308, "Spindle", "Inch").expect("overflow");
    assert!(v.is_infinite() && v > 0.0, "got {v}");
    let v = convert(UnitKind::Length, 5e-324, "Inch", "Spindle").expect("underflow");
    assert_eq!(v, 0.0);
}
