//! Lookup layer: single reads against the taxonomy.

use crate::core::normalize::normalize;
use crate::core::service::CockpitService;
use crate::domain::results::{Lookup, NotFound};
use crate::domain::views::{
    AircraftProfileView, AvailableOptions, ColorStandards, DesignPrinciples, EraProfileView,
    InstrumentDetails, PanelLayoutRules,
};

const LAYOUT_PRINCIPLES: DesignPrinciples = DesignPrinciples {
    primary_scan: "T-shaped arrangement with attitude indicator as anchor",
    eye_movement: "Minimize eye travel between critical instruments",
    grouping: "Related functions cluster together",
    scanning: "Layout supports natural pilot scan patterns",
};

impl CockpitService {
    pub fn aircraft_profile(&self, aircraft_type: &str) -> Lookup<AircraftProfileView> {
        let aircraft_types = &self.store().taxonomy().aircraft_types;
        let key = normalize(aircraft_type);

        let Some(profile) = aircraft_types.get(&key) else {
            tracing::debug!("Aircraft type '{}' not found", aircraft_type);
            return Lookup::NotFound(NotFound::new(
                format!("Aircraft type '{}' not found", aircraft_type),
                "available_types",
                aircraft_types.keys().cloned().collect(),
            ));
        };

        tracing::debug!("Resolved aircraft type '{}' -> '{}'", aircraft_type, key);
        Lookup::Found(AircraftProfileView {
            aircraft_type: key,
            examples: profile.examples.clone(),
            configuration: profile.instrument_configuration.clone(),
            complexity: profile.panel_complexity.clone(),
            essential_instruments: profile.typical_instruments.essential.clone(),
            engine_instruments: profile.typical_instruments.engine.clone(),
            system_instruments: profile.typical_instruments.systems.clone(),
            features: profile.features.clone(),
        })
    }

    /// Searches every category at once; category names are not part of the key.
    pub fn instrument_details(&self, instrument_name: &str) -> Lookup<InstrumentDetails> {
        let instruments = self.store().instruments();
        let key = normalize(instrument_name);

        let Some(inst) = instruments.get(&key) else {
            tracing::debug!("Instrument '{}' not found", instrument_name);
            return Lookup::NotFound(NotFound::new(
                format!("Instrument '{}' not found", instrument_name),
                "available",
                instruments.keys().cloned().collect(),
            ));
        };

        Lookup::Found(InstrumentDetails {
            name: inst.name.clone(),
            aliases: inst.aliases.clone(),
            function: inst.function.clone(),
            visual_elements: inst.visual_elements.clone(),
            color_scheme: inst.color_scheme.clone(),
            position: inst.typical_position.clone(),
            criticality: inst.criticality,
            warning_zones: inst.warning_zones.clone(),
            speed_arcs: inst.speed_arcs.clone(),
        })
    }

    pub fn panel_layout_rules(&self) -> PanelLayoutRules {
        let positioning = &self.store().taxonomy().positioning;

        PanelLayoutRules {
            primary_scan_area: positioning.get("primary_scan_area").cloned(),
            engine_cluster: positioning.get("engine_cluster").cloned(),
            navigation_cluster: positioning.get("navigation_cluster").cloned(),
            systems_cluster: positioning.get("systems_cluster").cloned(),
            design_principles: LAYOUT_PRINCIPLES,
        }
    }

    pub fn color_standards(&self) -> ColorStandards {
        self.store().taxonomy().color_standards.clone()
    }

    pub fn era_profile(&self, era: &str) -> Lookup<EraProfileView> {
        let eras = &self.store().taxonomy().eras;
        let key = normalize(era);

        let Some(era_data) = eras.get(&key) else {
            tracing::debug!("Era '{}' not found", era);
            return Lookup::NotFound(NotFound::new(
                format!("Era '{}' not found", era),
                "available_eras",
                eras.keys().cloned().collect(),
            ));
        };

        Lookup::Found(EraProfileView {
            era: key,
            period: era_data.period.clone(),
            description: era_data.description.clone(),
            visual_characteristics: era_data.visual_characteristics.clone(),
            materials: era_data.materials.clone(),
            advantages: era_data.advantages.clone(),
        })
    }

    pub fn list_available_options(&self) -> AvailableOptions {
        let taxonomy = self.store().taxonomy();

        AvailableOptions {
            taxonomy_version: taxonomy.version.clone(),
            aircraft_types: taxonomy.aircraft_types.keys().cloned().collect(),
            instruments: self.store().instruments().keys().cloned().collect(),
            eras: taxonomy.eras.keys().cloned().collect(),
            scan_patterns: taxonomy.scan_patterns.keys().cloned().collect(),
            positioning_zones: taxonomy.positioning.keys().cloned().collect(),
            instrument_categories: taxonomy.instruments.keys().cloned().collect(),
        }
    }
}
