use std::collections::HashSet;

use fes_cooling_calculator::catalog::{
    application_areas, cooler_types, find_area, find_area_by_code, find_cooler, grouped_areas,
    AreaCategory, AreaKey, CoolerKey,
};

#[test]
fn fifty_two_areas_with_unique_codes() {
    let areas = application_areas();
    assert_eq!(areas.len(), 52);
    let codes: HashSet<_> = areas.iter().map(|a| a.code).collect();
    assert_eq!(codes.len(), 52);
    let keys: HashSet<_> = areas.iter().map(|a| a.key).collect();
    assert_eq!(keys.len(), 52);
}

#[test]
fn every_key_resolves_to_its_own_entry() {
    for area in application_areas() {
        assert_eq!(find_area(area.key).code, area.code);
        assert_eq!(area.key.code(), area.code);
        assert_eq!(AreaKey::from_code(area.code), Some(area.key));
        assert!(area.air_changes > 0.0, "{}", area.code);
    }
}

#[test]
fn lookup_by_code_is_lenient() {
    let a = find_area_by_code(" Warehouses ").expect("warehouses");
    assert_eq!(a.key, AreaKey::Warehouses);
    assert_eq!(a.air_changes, 6.0);
    assert!(find_area_by_code("moon_base").is_none());
}

#[test]
fn known_air_change_values() {
    assert_eq!(find_area(AreaKey::Factories).air_changes, 30.0);
    assert_eq!(find_area(AreaKey::EngineRooms).air_changes, 40.0);
    assert_eq!(find_area(AreaKey::Canteen).air_changes, 27.0);
    assert_eq!(find_area(AreaKey::Theaters).air_changes, 8.0);
    assert_eq!(find_area(AreaKey::Auditoriums).name, "Conference Halls");
}

#[test]
fn categories_in_display_order() {
    let groups = grouped_areas();
    let order: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
    assert_eq!(order, AreaCategory::ALL.to_vec());
    let counts: Vec<_> = groups.iter().map(|(_, items)| items.len()).collect();
    assert_eq!(counts, vec![7, 5, 5, 7, 6, 4, 3, 6, 4, 5]);
    assert_eq!(groups[0].0.label(), "🏭 PLASTIC AND RUBBER");
    assert_eq!(groups[9].0.label(), "🏭 FACTORY & PRODUCTION");
    assert_eq!(groups[0].1[0].key, AreaKey::PlasticInjection);
}

#[test]
fn cooler_specs() {
    let specs: Vec<_> = cooler_types()
        .iter()
        .map(|c| (c.key.code(), c.model, c.capacity_m3h, c.power_kw))
        .collect();
    assert_eq!(
        specs,
        vec![
            ("fes25", "FES25-APB/APT", 25_000.0, 2.2),
            ("fes30", "FES30-APB/APT", 30_000.0, 3.0),
            ("fes35plug", "FES35-PLUG", 35_000.0, 11.2),
        ]
    );
    assert_eq!(CoolerKey::from_code("FES35PLUG"), Some(CoolerKey::Fes35Plug));
    assert_eq!(find_cooler(CoolerKey::Fes35Plug).map(|c| c.name), Some("FES35"));
}

#[test]
fn cooler_key_serializes_as_code() {
    let json = serde_json::to_string(&CoolerKey::Fes35Plug).expect("serialize");
    assert_eq!(json, "\"fes35plug\"");
    let key: AreaKey = serde_json::from_str("\"paint_shop_spray\"").expect("deserialize");
    assert_eq!(key, AreaKey::PaintShopSpray);
}
