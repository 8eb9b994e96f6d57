use serde::{Deserialize, Serialize};

use crate::catalog::{find_area, AreaKey};

/// 계산에 사용된 환기 횟수의 출처.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirChangeSource {
    /// 사용자가 직접 입력한 값
    Manual,
    /// 적용 분야 카탈로그 값
    Catalog(AreaKey),
    /// 기본값
    Default,
}

/// 환기 횟수와 그 출처.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAirChanges {
    pub value: f64,
    pub source: AirChangeSource,
}

/// 환기 횟수를 결정한다. 우선순위: 수동 입력 > 적용 분야 > 기본값.
/// 수동 입력값은 범위 검사 없이 그대로 사용한다.
pub fn resolve_air_changes(
    manual: bool,
    custom_value: f64,
    area: Option<AreaKey>,
    default_value: f64,
) -> ResolvedAirChanges {
    if manual {
        return ResolvedAirChanges {
            value: custom_value,
            source: AirChangeSource::Manual,
        };
    }
    match area {
        Some(key) => ResolvedAirChanges {
            value: find_area(key).air_changes,
            source: AirChangeSource::Catalog(key),
        },
        None => ResolvedAirChanges {
            value: default_value,
            source: AirChangeSource::Default,
        },
    }
}
