//! Composition layer: merges several lookups into one structure.

use crate::core::service::CockpitService;
use crate::domain::results::{Composition, CompositionInvalid, Lookup};
use crate::domain::views::{InstrumentSet, InstrumentSuggestion, LayoutLogic, PanelSpecification};

pub const MISSION_IFR_CROSS_COUNTRY: &str = "ifr_cross_country";
pub const MISSION_VFR_TRAINING: &str = "vfr_training";
pub const DEFAULT_FOCUS_AREA: &str = "full_panel";
pub const DEFAULT_DETAIL_LEVEL: &str = "medium";
pub const DETAIL_COMPREHENSIVE: &str = "comprehensive";

const IFR_NAVIGATION: [&str; 3] = ["vor_indicator", "adf_indicator", "dme"];

/// Mission-specific additions. Only the two named missions change anything.
struct MissionAdditions {
    navigation: Vec<String>,
    redundancy: Option<bool>,
    simplified: Option<bool>,
}

fn mission_additions(mission_profile: Option<&str>) -> MissionAdditions {
    match mission_profile {
        Some(MISSION_IFR_CROSS_COUNTRY) => MissionAdditions {
            navigation: IFR_NAVIGATION.iter().map(|s| s.to_string()).collect(),
            redundancy: Some(true),
            simplified: None,
        },
        Some(MISSION_VFR_TRAINING) => MissionAdditions {
            navigation: Vec::new(),
            redundancy: None,
            simplified: Some(true),
        },
        _ => MissionAdditions {
            navigation: Vec::new(),
            redundancy: None,
            simplified: None,
        },
    }
}

impl CockpitService {
    /// A NotFound for the aircraft type is passed through unchanged.
    pub fn suggest_instruments(
        &self,
        aircraft_type: &str,
        mission_profile: Option<&str>,
        complexity_level: Option<&str>,
    ) -> Lookup<InstrumentSuggestion> {
        self.aircraft_profile(aircraft_type).map(|profile| {
            let additions = mission_additions(mission_profile);
            let scan_pattern_recommendation = if mission_profile == Some(MISSION_IFR_CROSS_COUNTRY) {
                "instrument_flight"
            } else {
                "vfr_cruise"
            };

            InstrumentSuggestion {
                aircraft_type: aircraft_type.to_string(),
                mission: non_empty(mission_profile).unwrap_or("general").to_string(),
                instruments: InstrumentSet {
                    critical: profile.essential_instruments,
                    engine: profile.engine_instruments,
                    systems: profile.system_instruments,
                    navigation: additions.navigation,
                },
                layout_style: profile.configuration,
                panel_complexity: non_empty(complexity_level)
                    .map(str::to_string)
                    .or(profile.complexity),
                scan_pattern_recommendation,
                redundancy: additions.redundancy,
                simplified: additions.simplified,
            }
        })
    }

    /// Either failed lookup collapses into one generic error without candidates.
    pub fn build_panel_specification(
        &self,
        aircraft_type: &str,
        panel_era: &str,
        focus_area: Option<&str>,
        detail_level: &str,
    ) -> Composition<PanelSpecification> {
        let aircraft = self.aircraft_profile(aircraft_type);
        let era = self.era_profile(panel_era);
        let layout = self.panel_layout_rules();
        let colors = self.color_standards();

        let (Lookup::Found(aircraft), Lookup::Found(era)) = (aircraft, era) else {
            tracing::debug!(
                "Panel specification rejected for aircraft '{}' / era '{}'",
                aircraft_type,
                panel_era
            );
            return Composition::Invalid(CompositionInvalid::aircraft_or_era());
        };

        // A missing pattern attaches an empty object rather than failing.
        let scan_patterns = (detail_level == DETAIL_COMPREHENSIVE).then(|| {
            self.store()
                .taxonomy()
                .scan_patterns
                .get("instrument_flight")
                .cloned()
                .unwrap_or_else(empty_object)
        });

        Composition::Built(PanelSpecification {
            aircraft_type: aircraft_type.to_string(),
            era: panel_era.to_string(),
            focus_area: non_empty(focus_area).unwrap_or(DEFAULT_FOCUS_AREA).to_string(),
            instruments: aircraft.essential_instruments,
            layout: layout.primary_scan_area,
            era_characteristics: era.visual_characteristics,
            materials: era.materials,
            color_palette: colors,
            layout_logic: LayoutLogic::BASIC_T,
            scan_patterns,
        })
    }
}

/// Empty strings count as "not supplied".
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
