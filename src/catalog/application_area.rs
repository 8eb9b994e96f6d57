//! 적용 분야별 권장 환기 횟수(ACH) 테이블.
//! 카테고리 순서와 항목 순서는 화면/보고서 목록 표시 순서를 그대로 따른다.
use serde::{Deserialize, Serialize};

/// 적용 분야 키. 문자열 코드(`code`)와 1:1로 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKey {
    PlasticInjection,
    PolyesterProduction,
    PlasticExtrusion,
    PlasticLabels,
    RubberCalendering,
    RubberVulcanization,
    RubberExtrusion,
    MetalCasting,
    MetalProcessing,
    MetalWelding,
    MetalForming,
    MetalSpraying,
    GarmentCutting,
    GarmentIroning,
    Laundry,
    TextileMills,
    DryCleaners,
    FoodProduction,
    FoodSterilization,
    FoodPackaging,
    Kitchens,
    Restaurants,
    Bakeries,
    Canteen,
    Gymnasiums,
    BowlingAlleys,
    Theaters,
    Auditoriums,
    AssemblyHalls,
    RecreationRooms,
    RetailStores,
    Warehouses,
    ShopsGeneral,
    PackingHouses,
    Residences,
    Toilets,
    Garages,
    BoilerRooms,
    EngineRooms,
    GeneratorRooms,
    TransformerRooms,
    TurbineRooms,
    MachineRooms,
    PaintShopSuction,
    PaintShopSpray,
    WeldingWorkshops,
    MachineShops,
    QualityControl,
    Factories,
    Foundries,
    Forges,
    AssemblyLines,
}

impl AreaKey {
    /// 문자열 코드(예: "warehouses")로 키를 찾는다. 대소문자는 구분하지 않는다.
    pub fn from_code(code: &str) -> Option<Self> {
        find_area_by_code(code).map(|a| a.key)
    }

    pub fn code(&self) -> &'static str {
        find_area(*self).code
    }
}

/// 목록 표시용 카테고리. 계산 결과에는 영향을 주지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaCategory {
    PlasticRubber,
    MetalProcessing,
    GarmentTextile,
    FoodRestaurant,
    SportsLeisure,
    CommerceStorage,
    ResidentialGeneral,
    EnergyTechnical,
    PaintingWorkshop,
    FactoryProduction,
}

impl AreaCategory {
    /// 표시 순서대로 나열한 전체 카테고리.
    pub const ALL: [AreaCategory; 10] = [
        AreaCategory::PlasticRubber,
        AreaCategory::MetalProcessing,
        AreaCategory::GarmentTextile,
        AreaCategory::FoodRestaurant,
        AreaCategory::SportsLeisure,
        AreaCategory::CommerceStorage,
        AreaCategory::ResidentialGeneral,
        AreaCategory::EnergyTechnical,
        AreaCategory::PaintingWorkshop,
        AreaCategory::FactoryProduction,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AreaCategory::PlasticRubber => "🏭 PLASTIC AND RUBBER",
            AreaCategory::MetalProcessing => "⚡ METAL PROCESSING",
            AreaCategory::GarmentTextile => "👔 GARMENT AND TEXTILE",
            AreaCategory::FoodRestaurant => "🍽️ FOOD AND RESTAURANT",
            AreaCategory::SportsLeisure => "🏃‍♂️ SPORTS AND LEISURE",
            AreaCategory::CommerceStorage => "🏪 COMMERCE AND STORAGE",
            AreaCategory::ResidentialGeneral => "🏠 RESIDENTIAL AND GENERAL",
            AreaCategory::EnergyTechnical => "⚡ ENERGY AND TECHNICAL FACILITIES",
            AreaCategory::PaintingWorkshop => "🎨 PAINTING & WORKSHOP",
            AreaCategory::FactoryProduction => "🏭 FACTORY & PRODUCTION",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplicationArea {
    pub key: AreaKey,
    pub code: &'static str,
    pub name: &'static str,
    pub category: AreaCategory,
    /// 권장 시간당 환기 횟수 [1/h]
    pub air_changes: f64,
}

impl ApplicationArea {
    const fn new(
        key: AreaKey,
        code: &'static str,
        name: &'static str,
        category: AreaCategory,
        air_changes: f64,
    ) -> Self {
        Self {
            key,
            code,
            name,
            category,
            air_changes,
        }
    }
}

pub fn application_areas() -> &'static [ApplicationArea] {
    APPLICATION_AREAS
}

pub fn find_area(key: AreaKey) -> &'static ApplicationArea {
    // 모든 키가 테이블에 존재한다(catalog 테스트로 보장).
    APPLICATION_AREAS
        .iter()
        .find(|a| a.key == key)
        .unwrap_or(&APPLICATION_AREAS[0])
}

pub fn find_area_by_code(code: &str) -> Option<&'static ApplicationArea> {
    let code = code.trim();
    APPLICATION_AREAS
        .iter()
        .find(|a| a.code.eq_ignore_ascii_case(code))
}

/// 카테고리별로 묶은 목록을 표시 순서대로 반환한다.
pub fn grouped_areas() -> Vec<(AreaCategory, Vec<&'static ApplicationArea>)> {
    AreaCategory::ALL
        .iter()
        .map(|cat| {
            let items = APPLICATION_AREAS
                .iter()
                .filter(|a| a.category == *cat)
                .collect();
            (*cat, items)
        })
        .collect()
}

use AreaCategory as C;
use AreaKey as K;

static APPLICATION_AREAS: &[ApplicationArea] = &[
    ApplicationArea::new(K::PlasticInjection, "plastic_injection", "Plastic Injection", C::PlasticRubber, 35.0),
    ApplicationArea::new(K::PolyesterProduction, "polyester_production", "Polyester Bag & Film Production", C::PlasticRubber, 40.0),
    ApplicationArea::new(K::PlasticExtrusion, "plastic_extrusion", "Plastic Extrusion", C::PlasticRubber, 30.0),
    ApplicationArea::new(K::PlasticLabels, "plastic_labels", "Plastic Labels and Printing Films", C::PlasticRubber, 35.0),
    ApplicationArea::new(K::RubberCalendering, "rubber_calendering", "Rubber Calendering", C::PlasticRubber, 40.0),
    ApplicationArea::new(K::RubberVulcanization, "rubber_vulcanization", "Rubber Vulcanization", C::PlasticRubber, 40.0),
    ApplicationArea::new(K::RubberExtrusion, "rubber_extrusion", "Rubber Extrusion and Grinding", C::PlasticRubber, 40.0),
    ApplicationArea::new(K::MetalCasting, "metal_casting", "Metal Casting", C::MetalProcessing, 40.0),
    ApplicationArea::new(K::MetalProcessing, "metal_processing", "Metal Processing, Milling, Pressing", C::MetalProcessing, 25.0),
    ApplicationArea::new(K::MetalWelding, "metal_welding", "Metal Welding", C::MetalProcessing, 35.0),
    ApplicationArea::new(K::MetalForming, "metal_forming", "Metal Forming", C::MetalProcessing, 35.0),
    ApplicationArea::new(K::MetalSpraying, "metal_spraying", "Metal Spraying", C::MetalProcessing, 35.0),
    ApplicationArea::new(K::GarmentCutting, "garment_cutting", "Garment Cutting, Sewing", C::GarmentTextile, 30.0),
    ApplicationArea::new(K::GarmentIroning, "garment_ironing", "Garment Ironing", C::GarmentTextile, 40.0),
    ApplicationArea::new(K::Laundry, "laundry", "Laundry", C::GarmentTextile, 12.0),
    ApplicationArea::new(K::TextileMills, "textile_mills", "Textile Mills", C::GarmentTextile, 10.0),
    ApplicationArea::new(K::DryCleaners, "dry_cleaners", "Dry Cleaners", C::GarmentTextile, 12.0),
    ApplicationArea::new(K::FoodProduction, "food_production", "Food Production", C::FoodRestaurant, 40.0),
    ApplicationArea::new(K::FoodSterilization, "food_sterilization", "Food Sterilization", C::FoodRestaurant, 40.0),
    ApplicationArea::new(K::FoodPackaging, "food_packaging", "Food Packaging, Canning", C::FoodRestaurant, 30.0),
    ApplicationArea::new(K::Kitchens, "kitchens", "Kitchens", C::FoodRestaurant, 20.0),
    ApplicationArea::new(K::Restaurants, "restaurants", "Restaurants", C::FoodRestaurant, 12.0),
    ApplicationArea::new(K::Bakeries, "bakeries", "Bakeries", C::FoodRestaurant, 20.0),
    ApplicationArea::new(K::Canteen, "canteen", "Canteen & Cafeteria", C::FoodRestaurant, 27.0),
    ApplicationArea::new(K::Gymnasiums, "gymnasiums", "Gymnasiums", C::SportsLeisure, 12.0),
    ApplicationArea::new(K::BowlingAlleys, "bowling_alleys", "Bowling Alleys", C::SportsLeisure, 10.0),
    ApplicationArea::new(K::Theaters, "theaters", "Theaters", C::SportsLeisure, 8.0),
    ApplicationArea::new(K::Auditoriums, "auditoriums", "Conference Halls", C::SportsLeisure, 15.0),
    ApplicationArea::new(K::AssemblyHalls, "assembly_halls", "Meeting Rooms", C::SportsLeisure, 8.0),
    ApplicationArea::new(K::RecreationRooms, "recreation_rooms", "Recreation Rooms", C::SportsLeisure, 10.0),
    ApplicationArea::new(K::RetailStores, "retail_stores", "Retail Stores", C::CommerceStorage, 8.0),
    ApplicationArea::new(K::Warehouses, "warehouses", "Warehouses", C::CommerceStorage, 6.0),
    ApplicationArea::new(K::ShopsGeneral, "shops_general", "Shops (General)", C::CommerceStorage, 8.0),
    ApplicationArea::new(K::PackingHouses, "packing_houses", "Packing Houses", C::CommerceStorage, 6.0),
    ApplicationArea::new(K::Residences, "residences", "Residences", C::ResidentialGeneral, 12.0),
    ApplicationArea::new(K::Toilets, "toilets", "Toilets", C::ResidentialGeneral, 12.0),
    ApplicationArea::new(K::Garages, "garages", "Garages", C::ResidentialGeneral, 12.0),
    ApplicationArea::new(K::BoilerRooms, "boiler_rooms", "Boiler Rooms", C::EnergyTechnical, 15.0),
    ApplicationArea::new(K::EngineRooms, "engine_rooms", "Engine Rooms", C::EnergyTechnical, 40.0),
    ApplicationArea::new(K::GeneratorRooms, "generator_rooms", "Generator Rooms", C::EnergyTechnical, 30.0),
    ApplicationArea::new(K::TransformerRooms, "transformer_rooms", "Transformer Rooms", C::EnergyTechnical, 12.0),
    ApplicationArea::new(K::TurbineRooms, "turbine_rooms", "Turbine Rooms", C::EnergyTechnical, 10.0),
    ApplicationArea::new(K::MachineRooms, "machine_rooms", "Machine Rooms", C::EnergyTechnical, 25.0),
    ApplicationArea::new(K::PaintShopSuction, "paint_shop_suction", "Paint Shop (Exhaust)", C::PaintingWorkshop, 10.0),
    ApplicationArea::new(K::PaintShopSpray, "paint_shop_spray", "Paint Shop (Spray)", C::PaintingWorkshop, 40.0),
    ApplicationArea::new(K::WeldingWorkshops, "welding_workshops", "Welding Workshops", C::PaintingWorkshop, 22.0),
    ApplicationArea::new(K::MachineShops, "machine_shops", "Machine Shops", C::PaintingWorkshop, 12.0),
    ApplicationArea::new(K::QualityControl, "quality_control", "Quality Control", C::FactoryProduction, 40.0),
    ApplicationArea::new(K::Factories, "factories", "Factories (General)", C::FactoryProduction, 30.0),
    ApplicationArea::new(K::Foundries, "foundries", "Foundries", C::FactoryProduction, 12.0),
    ApplicationArea::new(K::Forges, "forges", "Forges", C::FactoryProduction, 12.0),
    ApplicationArea::new(K::AssemblyLines, "assembly_lines", "Assembly Lines", C::FactoryProduction, 30.0),
];
