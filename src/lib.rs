//! 길이/질량 단위 변환 엔진. CLI 외의 화면에서도 그대로 쓸 수 있도록 라이브러리로 분리한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod format;
pub mod logging;
pub mod quantity;
pub mod ui_cli;
pub mod units;
pub mod weight;

pub use conversion::{convert, convert_units, Conversion, ConversionError, ConversionRequest};
pub use format::format_display_value;
pub use quantity::UnitKind;
pub use units::{find_unit, list_units, Unit};
pub use weight::{compute_derived_force, Force};
