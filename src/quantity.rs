use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;

/// 변환 도메인(kind). 같은 kind 안의 단위끼리만 변환할 수 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Length,
    Mass,
}

impl UnitKind {
    /// 모든 kind를 메뉴 표시 순서대로 반환한다.
    pub const ALL: [UnitKind; 2] = [UnitKind::Length, UnitKind::Mass];

    pub fn as_str(self) -> &'static str {
        match self {
            UnitKind::Length => "length",
            UnitKind::Mass => "mass",
        }
    }

    /// 해당 kind의 기준 단위 이름.
    pub fn base_unit_name(self) -> &'static str {
        match self {
            UnitKind::Length => "Inch",
            UnitKind::Mass => "Kilograms",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "length" | "len" | "l" => Ok(UnitKind::Length),
            "mass" | "weight" | "m" => Ok(UnitKind::Mass),
            _ => Err(ConversionError::UnknownKind(trimmed.to_string())),
        }
    }
}
