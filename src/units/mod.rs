//! 단위 정의 및 조회 모듈 모음.
//!
//! 각 kind는 기준 단위에 대한 배율(factor)을 가진 정적 테이블 하나로 표현된다.

pub mod length;
pub mod mass;

use tracing::debug;

use crate::conversion::ConversionError;
use crate::quantity::UnitKind;

/// 이름이 붙은 단위. `factor`는 이 단위 1이 기준 단위 몇 개에 해당하는지를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// 표시 이름. kind 안에서 유일하다.
    pub name: &'static str,
    /// 기준 단위 환산 배율 (항상 0보다 크다)
    pub factor: f64,
    /// 입력용 짧은 별칭 (예: `ft`, `lbs`)
    pub aliases: &'static [&'static str],
}

impl Unit {
    /// 이 단위의 값을 기준 단위 값으로 환산한다.
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// 기준 단위 값을 이 단위의 값으로 환산한다.
    pub fn from_base(&self, value_base: f64) -> f64 {
        value_base / self.factor
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.eq_ignore_ascii_case(needle)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(needle))
    }
}

/// kind에 등록된 단위를 등록 순서대로 반환한다.
pub fn list_units(kind: UnitKind) -> &'static [Unit] {
    match kind {
        UnitKind::Length => length::LENGTH_UNITS,
        UnitKind::Mass => mass::MASS_UNITS,
    }
}

/// 이름 또는 별칭으로 단위를 찾는다. 대소문자와 앞뒤 공백은 무시한다.
pub fn find_unit(kind: UnitKind, name: &str) -> Result<&'static Unit, ConversionError> {
    let needle = name.trim();
    list_units(kind)
        .iter()
        .find(|unit| unit.matches(needle))
        .ok_or_else(|| {
            debug!(%kind, unit = needle, "unit lookup failed");
            ConversionError::UnknownUnit {
                kind,
                name: needle.to_string(),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_factor_is_positive() {
        for kind in UnitKind::ALL {
            for unit in list_units(kind) {
                assert!(unit.factor > 0.0, "{} has factor {}", unit.name, unit.factor);
            }
        }
    }

    #[test]
    fn names_and_aliases_are_unique_within_a_kind() {
        for kind in UnitKind::ALL {
            let mut seen: Vec<String> = Vec::new();
            for unit in list_units(kind) {
                for label in std::iter::once(&unit.name).chain(unit.aliases.iter()) {
                    let key = label.to_lowercase();
                    assert!(!seen.contains(&key), "duplicate label {label} in {kind}");
                    seen.push(key);
                }
            }
        }
    }

    #[test]
    fn base_unit_has_unit_factor() {
        for kind in UnitKind::ALL {
            let base = find_unit(kind, kind.base_unit_name()).expect("base unit");
            assert_eq!(base.factor, 1.0);
        }
    }
}
