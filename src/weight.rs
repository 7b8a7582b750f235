//! 질량에서 유도되는 중량(힘) 계산.

use crate::units::Unit;

/// 중력 가속도 [m/s²]
pub const GRAVITY: f64 = 9.81;

/// 질량에 작용하는 중량.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    /// [N]
    pub newtons: f64,
    /// [kN]
    pub kilonewtons: f64,
}

/// kg 단위 질량으로부터 중량을 계산한다.
pub fn compute_derived_force(mass_kg: f64) -> Force {
    let newtons = mass_kg * GRAVITY;
    Force {
        newtons,
        kilonewtons: newtons / 1000.0,
    }
}

/// 임의의 질량 단위 값을 kg으로 환산한 뒤 중량을 계산한다.
pub fn weight_of(value: f64, unit: &Unit) -> Force {
    compute_derived_force(unit.to_base(value))
}
