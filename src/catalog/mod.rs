//! 계산에 쓰이는 정적 참조 데이터(적용 분야, FES 냉각기 모델)를 모아둔다.
//! 값은 프로세스 시작 시점부터 고정이며 변경되지 않는다.

pub mod application_area;
pub mod cooler;

pub use application_area::{
    application_areas, find_area, find_area_by_code, grouped_areas, AreaCategory, AreaKey,
    ApplicationArea,
};
pub use cooler::{cooler_types, find_cooler, CoolerKey, CoolerType, COOLER_TYPES};
