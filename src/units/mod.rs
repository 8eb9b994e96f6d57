//! 입력 단위 정의 및 SI 환산. 계산 코어는 °C, m, m²만 다룬다.

pub mod area;
pub mod length;
pub mod temperature;

pub use area::{convert_area, AreaUnit};
pub use length::{convert_length, LengthUnit};
pub use temperature::{convert_temperature, TemperatureUnit};

use serde::{Deserialize, Serialize};

use crate::cooling::CalculationRequest;

/// 사용자 입력에 쓰는 단위 묶음.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputUnits {
    pub temperature: TemperatureUnit,
    pub length: LengthUnit,
    pub area: AreaUnit,
}

impl Default for InputUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            length: LengthUnit::Meter,
            area: AreaUnit::SquareMeter,
        }
    }
}

impl InputUnits {
    /// 요청의 면적/높이/온도를 SI로 바꾼다. 나머지 필드는 그대로 둔다.
    pub fn to_si(&self, req: CalculationRequest) -> CalculationRequest {
        CalculationRequest {
            area: area::to_square_meter(req.area, self.area),
            height: length::to_meter(req.height, self.length),
            outdoor_temp: temperature::to_celsius(req.outdoor_temp, self.temperature),
            ..req
        }
    }
}
