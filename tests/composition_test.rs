use anyhow::Result;
use cockpit_design_aesthetics::{CockpitService, Composition, Lookup, TaxonomyStore};
use std::collections::BTreeSet;

fn service() -> Result<CockpitService> {
    Ok(CockpitService::new(TaxonomyStore::embedded()?))
}

#[test]
fn test_suggest_instruments_single_engine() -> Result<()> {
    let service = service()?;
    let suggestion = service
        .suggest_instruments("general_aviation_singles", None, None)
        .into_found()
        .unwrap();

    assert_eq!(suggestion.aircraft_type, "general_aviation_singles");
    assert_eq!(suggestion.mission, "general");
    assert!(suggestion
        .instruments
        .critical
        .contains(&"attitude_indicator".to_string()));
    assert!(suggestion.instruments.navigation.is_empty());
    assert_eq!(suggestion.scan_pattern_recommendation, "vfr_cruise");
    assert_eq!(suggestion.panel_complexity.as_deref(), Some("basic"));
    assert_eq!(suggestion.redundancy, None);
    assert_eq!(suggestion.simplified, None);
    Ok(())
}

#[test]
fn test_navigation_depends_on_mission_for_every_aircraft() -> Result<()> {
    let service = service()?;
    for aircraft_type in service.list_available_options().aircraft_types {
        let ifr = service
            .suggest_instruments(&aircraft_type, Some("ifr_cross_country"), None)
            .into_found()
            .unwrap();
        assert_eq!(
            ifr.instruments.navigation,
            vec!["vor_indicator", "adf_indicator", "dme"]
        );
        assert_eq!(ifr.redundancy, Some(true));
        assert_eq!(ifr.scan_pattern_recommendation, "instrument_flight");
        assert_eq!(ifr.mission, "ifr_cross_country");

        let vfr = service
            .suggest_instruments(&aircraft_type, Some("vfr_training"), None)
            .into_found()
            .unwrap();
        assert!(vfr.instruments.navigation.is_empty());
        assert_eq!(vfr.simplified, Some(true));
        assert_eq!(vfr.scan_pattern_recommendation, "vfr_cruise");
    }
    Ok(())
}

#[test]
fn test_suggest_instruments_complexity_override() -> Result<()> {
    let service = service()?;
    let suggestion = service
        .suggest_instruments("general_aviation_twins", Some("aerobatics"), Some("advanced"))
        .into_found()
        .unwrap();

    assert_eq!(suggestion.panel_complexity.as_deref(), Some("advanced"));
    assert_eq!(suggestion.mission, "aerobatics");
    assert!(suggestion.instruments.navigation.is_empty());
    assert_eq!(suggestion.redundancy, None);
    assert_eq!(suggestion.simplified, None);
    Ok(())
}

#[test]
fn test_suggest_instruments_propagates_not_found() -> Result<()> {
    let service = service()?;
    let direct = service.aircraft_profile("zeppelin");
    let suggested = service.suggest_instruments("zeppelin", Some("ifr_cross_country"), None);

    match (direct, suggested) {
        (Lookup::NotFound(a), Lookup::NotFound(b)) => assert_eq!(a, b),
        _ => panic!("both lookups should miss"),
    }
    Ok(())
}

#[test]
fn test_build_panel_specification_basic() -> Result<()> {
    let service = service()?;
    let spec = service
        .build_panel_specification("general_aviation_singles", "analog_mechanical", None, "medium")
        .into_built()
        .unwrap();

    assert_eq!(spec.aircraft_type, "general_aviation_singles");
    assert_eq!(spec.era, "analog_mechanical");
    assert_eq!(spec.focus_area, "full_panel");
    assert!(!spec.instruments.is_empty());
    assert_eq!(spec.layout.as_ref().unwrap()["anchor"], "attitude_indicator");
    assert!(!spec.era_characteristics.is_empty());
    assert_eq!(spec.color_palette["warning"].color, "#FF0000");
    assert!(spec.layout_logic.primary_scan_t_shape);
    assert!(spec.scan_patterns.is_none());
    Ok(())
}

#[test]
fn test_specification_key_set() -> Result<()> {
    let service = service()?;
    let base: BTreeSet<&str> = [
        "aircraft_type",
        "era",
        "focus_area",
        "instruments",
        "layout",
        "era_characteristics",
        "materials",
        "color_palette",
        "layout_logic",
    ]
    .into_iter()
    .collect();

    for detail_level in ["medium", "brief", "comprehensive"] {
        let spec = service.build_panel_specification(
            "commercial_airliners",
            "glass_cockpit",
            Some("engine_cluster"),
            detail_level,
        );
        let wire = serde_json::to_value(&spec)?;
        let keys: BTreeSet<&str> = wire.as_object().unwrap().keys().map(String::as_str).collect();

        let mut expected = base.clone();
        if detail_level == "comprehensive" {
            expected.insert("scan_patterns");
        }
        assert_eq!(keys, expected, "detail level {detail_level}");
        assert_eq!(wire["focus_area"], "engine_cluster");
    }
    Ok(())
}

#[test]
fn test_comprehensive_attaches_instrument_flight_pattern() -> Result<()> {
    let service = service()?;
    let spec = service
        .build_panel_specification("general_aviation_singles", "analog_mechanical", None, "comprehensive")
        .into_built()
        .unwrap();
    let pattern = spec.scan_patterns.unwrap();
    assert_eq!(pattern["hub"], "attitude_indicator");
    Ok(())
}

#[test]
fn test_missing_pattern_and_scan_zone() -> Result<()> {
    let taxonomy = r#"
[aircraft_types.trainer.typical_instruments]
essential = ["altimeter"]

[instruments.flight.altimeter]
name = "Altimeter"

[eras.analog]
period = "then"
"#;
    let service = CockpitService::new(TaxonomyStore::from_toml_str(taxonomy, "inline")?);
    let spec = service
        .build_panel_specification("trainer", "analog", None, "comprehensive")
        .into_built()
        .unwrap();

    assert_eq!(spec.scan_patterns, Some(serde_json::json!({})));
    assert_eq!(spec.layout, None);
    assert!(spec.color_palette.is_empty());

    let wire = serde_json::to_value(&spec)?;
    assert_eq!(wire.get("layout"), Some(&serde_json::Value::Null));
    Ok(())
}

#[test]
fn test_invalid_inputs_collapse_to_generic_error() -> Result<()> {
    let service = service()?;
    for (aircraft, era) in [
        ("zeppelin", "analog_mechanical"),
        ("general_aviation_singles", "steampunk"),
        ("zeppelin", "steampunk"),
    ] {
        let result = service.build_panel_specification(aircraft, era, None, "medium");
        assert!(!result.is_built());
        let wire = serde_json::to_value(&result)?;
        assert_eq!(wire, serde_json::json!({"error": "Invalid aircraft type or era"}));
    }
    Ok(())
}

#[test]
fn test_specification_echoes_raw_inputs() -> Result<()> {
    let service = service()?;
    match service.build_panel_specification("Fighter Jets", "HUD-Integration", None, "medium") {
        Composition::Built(spec) => {
            assert_eq!(spec.aircraft_type, "Fighter Jets");
            assert_eq!(spec.era, "HUD-Integration");
            assert_eq!(spec.instruments[0], "head_up_display");
        }
        Composition::Invalid(err) => panic!("unexpected error: {}", err.error),
    }
    Ok(())
}
