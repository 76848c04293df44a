use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::model::{ColorStandard, Criticality};

// Lookup layer

#[derive(Debug, Clone, Serialize)]
pub struct AircraftProfileView {
    pub aircraft_type: String,
    pub examples: Vec<String>,
    pub configuration: Option<String>,
    pub complexity: Option<String>,
    pub essential_instruments: Vec<String>,
    pub engine_instruments: Vec<String>,
    pub system_instruments: Vec<String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstrumentDetails {
    pub name: Option<String>,
    pub aliases: Vec<String>,
    pub function: Option<String>,
    pub visual_elements: Vec<String>,
    pub color_scheme: BTreeMap<String, String>,
    pub position: Option<String>,
    pub criticality: Option<Criticality>,
    pub warning_zones: BTreeMap<String, String>,
    pub speed_arcs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignPrinciples {
    pub primary_scan: &'static str,
    pub eye_movement: &'static str,
    pub grouping: &'static str,
    pub scanning: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelLayoutRules {
    pub primary_scan_area: Option<serde_json::Value>,
    pub engine_cluster: Option<serde_json::Value>,
    pub navigation_cluster: Option<serde_json::Value>,
    pub systems_cluster: Option<serde_json::Value>,
    pub design_principles: DesignPrinciples,
}

pub type ColorStandards = BTreeMap<String, ColorStandard>;

#[derive(Debug, Clone, Serialize)]
pub struct EraProfileView {
    pub era: String,
    pub period: Option<String>,
    pub description: Option<String>,
    pub visual_characteristics: Vec<String>,
    pub materials: Vec<String>,
    pub advantages: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailableOptions {
    pub taxonomy_version: String,
    pub aircraft_types: Vec<String>,
    pub instruments: Vec<String>,
    pub eras: Vec<String>,
    pub scan_patterns: Vec<String>,
    pub positioning_zones: Vec<String>,
    pub instrument_categories: Vec<String>,
}

// Composition layer

#[derive(Debug, Clone, Serialize)]
pub struct InstrumentSet {
    pub critical: Vec<String>,
    pub engine: Vec<String>,
    pub systems: Vec<String>,
    pub navigation: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstrumentSuggestion {
    /// Echo of the caller's input, not the canonical key.
    pub aircraft_type: String,
    pub mission: String,
    pub instruments: InstrumentSet,
    pub layout_style: Option<String>,
    pub panel_complexity: Option<String>,
    pub scan_pattern_recommendation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redundancy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplified: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutLogic {
    pub primary_scan_t_shape: bool,
    pub attitude_indicator_centered: bool,
    pub altitude_right_of_attitude: bool,
    pub airspeed_left_of_attitude: bool,
}

impl LayoutLogic {
    pub const BASIC_T: LayoutLogic = LayoutLogic {
        primary_scan_t_shape: true,
        attitude_indicator_centered: true,
        altitude_right_of_attitude: true,
        airspeed_left_of_attitude: true,
    };
}

#[derive(Debug, Clone, Serialize)]
pub struct PanelSpecification {
    pub aircraft_type: String,
    pub era: String,
    pub focus_area: String,
    pub instruments: Vec<String>,
    pub layout: Option<serde_json::Value>,
    pub era_characteristics: Vec<String>,
    pub materials: Vec<String>,
    pub color_palette: ColorStandards,
    pub layout_logic: LayoutLogic,
    /// Present only for `detail_level == "comprehensive"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_patterns: Option<serde_json::Value>,
}

// Narrative layer

#[derive(Debug, Clone, Serialize)]
pub struct ColorConventions {
    pub warnings: &'static str,
    pub normal: &'static str,
    pub cautions: &'static str,
    pub neutral: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub subject: String,
    pub era_characteristics: Vec<String>,
    pub materials: Vec<String>,
    pub viewing_angle: String,
    pub lighting: String,
    pub key_instruments: Vec<InstrumentDetails>,
    pub color_conventions: ColorConventions,
    pub design_principles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_context: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SynthesisGuidance {
    pub tone: &'static str,
    pub detail_level: String,
    pub focus: &'static str,
    pub avoid: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CockpitPrompt {
    pub prompt_context: PromptContext,
    pub synthesis_guidance: SynthesisGuidance,
    pub ready_for_image_generation: bool,
    pub recommended_next_step: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub principle: &'static str,
    pub description: &'static str,
    pub why: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruments: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_arcs_example: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_pattern_supported: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<&'static [&'static str]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignExplanation {
    pub aspect: String,
    pub explanation: Explanation,
}
