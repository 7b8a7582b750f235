use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::format::format_display_value;
use crate::quantity::UnitKind;
use crate::units::{find_unit, Unit};
use crate::weight::{compute_derived_force, Force};

/// 선택되지 않은 단위가 입력 쪽인지 출력 쪽인지 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Source,
    Target,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Source => f.write_str("source"),
            Selection::Target => f.write_str("target"),
        }
    }
}

/// 단위 변환 시 발생 가능한 검증 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 숫자가 아니거나 0 이하인 값
    #[error("invalid value `{0}`: must be a number greater than 0")]
    InvalidValue(String),
    /// 입력/출력 단위 미선택
    #[error("no {0} unit selected")]
    MissingUnitSelection(Selection),
    /// 레지스트리에 없는 단위 이름
    #[error("unknown {kind} unit: {name}")]
    UnknownUnit { kind: UnitKind, name: String },
    /// 알 수 없는 kind 문자열
    #[error("unknown unit kind: {0} (expected `length` or `mass`)")]
    UnknownKind(String),
}

impl ConversionError {
    /// 화면에 띄울 안내 문구를 만든다.
    pub fn user_message(&self, kind: UnitKind) -> String {
        let noun = match kind {
            UnitKind::Length => "Length",
            UnitKind::Mass => "Mass",
        };
        match self {
            ConversionError::InvalidValue(_) => format!("{noun} must be greater than 0"),
            ConversionError::MissingUnitSelection(Selection::Source) => {
                format!("Please select an input {noun} Unit")
            }
            ConversionError::MissingUnitSelection(Selection::Target) => {
                format!("Please select an output {noun} Unit")
            }
            ConversionError::UnknownUnit { name, .. } => {
                format!("Unknown {noun} Unit: {name}")
            }
            ConversionError::UnknownKind(k) => format!("Unknown conversion kind: {k}"),
        }
    }
}

/// 변환 가능한 값인지 확인한다. 유한하고 0보다 커야 한다.
pub fn validate_value(value: f64) -> Result<f64, ConversionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConversionError::InvalidValue(value.to_string()))
    }
}

/// 사용자가 입력한 문자열을 변환 가능한 값으로 해석한다.
pub fn parse_value(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| ConversionError::InvalidValue(trimmed.to_string()))
}

/// 두 단위 사이에서 값을 변환한다. 반올림은 하지 않는다.
///
/// `value * source.factor / target.factor`. 결과가 `f64` 범위를 넘으면 무한대,
/// 표현 가능한 최솟값보다 작으면 0이 그대로 반환된다.
pub fn convert_units(value: f64, source: &Unit, target: &Unit) -> Result<f64, ConversionError> {
    let value = validate_value(value)?;
    Ok(target.from_base(source.to_base(value)))
}

/// 단위 이름 문자열로 변환한다. 빈 문자열은 미선택으로 취급한다.
///
/// 단위 이름은 표시 이름(`Foot`) 또는 별칭(`ft`)을 사용할 수 있다.
pub fn convert(
    kind: UnitKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let conversion = ConversionRequest::new(kind, value)
        .from_unit(from_unit_str)
        .to_unit(to_unit_str)
        .evaluate()?;
    Ok(conversion.result)
}

/// 한 번의 사용자 요청. 화면에서 선택하지 않은 단위는 `None`으로 둔다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub kind: UnitKind,
    pub value: f64,
    pub source: Option<String>,
    pub target: Option<String>,
}

impl ConversionRequest {
    pub fn new(kind: UnitKind, value: f64) -> Self {
        Self {
            kind,
            value,
            source: None,
            target: None,
        }
    }

    pub fn from_unit(mut self, name: &str) -> Self {
        self.source = selection(name);
        self
    }

    pub fn to_unit(mut self, name: &str) -> Self {
        self.target = selection(name);
        self
    }

    /// 값, 입력 단위 선택, 출력 단위 선택, 단위 조회 순서로 검증한 뒤 변환한다.
    pub fn evaluate(&self) -> Result<Conversion, ConversionError> {
        let value = validate_value(self.value)?;
        let source_name = self
            .source
            .as_deref()
            .ok_or(ConversionError::MissingUnitSelection(Selection::Source))?;
        let target_name = self
            .target
            .as_deref()
            .ok_or(ConversionError::MissingUnitSelection(Selection::Target))?;
        let source = find_unit(self.kind, source_name)?;
        let target = find_unit(self.kind, target_name)?;

        let result = convert_units(value, source, target)?;
        let force = match self.kind {
            UnitKind::Mass => Some(compute_derived_force(source.to_base(value))),
            UnitKind::Length => None,
        };
        debug!(
            kind = %self.kind,
            value,
            source = source.name,
            target = target.name,
            result,
            "converted"
        );
        Ok(Conversion {
            kind: self.kind,
            value,
            source,
            target,
            result,
            force,
        })
    }
}

fn selection(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// 변환 결과. 질량 변환이면 입력 질량의 중량(힘)을 함께 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub kind: UnitKind,
    pub value: f64,
    pub source: &'static Unit,
    pub target: &'static Unit,
    pub result: f64,
    pub force: Option<Force>,
}

impl Conversion {
    /// `12 Inch is equal to 1.00 Foot` 형태의 한 줄 요약.
    pub fn summary(&self) -> String {
        format!(
            "{} {} is equal to {} {}",
            self.value,
            self.source.name,
            format_display_value(self.result),
            self.target.name
        )
    }

    /// 화면에 출력할 줄 목록.
    ///
    /// 길이는 요약 한 줄, 질량은 `Converted Mass` 줄 뒤에 N, kN 중량이 이어진다.
    pub fn report_lines(&self) -> Vec<String> {
        let Some(force) = self.force else {
            return vec![self.summary()];
        };
        vec![
            format!(
                "Converted Mass: {} {}",
                format_display_value(self.result),
                self.target.name
            ),
            format!("Weight in Newtons: {} N", format_display_value(force.newtons)),
            format!(
                "Weight in Kilonewtons: {} kN",
                format_display_value(force.kilonewtons)
            ),
        ]
    }
}
