use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of the instrument taxonomy. Loaded once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub aircraft_types: BTreeMap<String, AircraftProfile>,
    /// category key -> instrument key -> spec
    #[serde(default)]
    pub instruments: BTreeMap<String, BTreeMap<String, InstrumentSpec>>,
    #[serde(default)]
    pub eras: BTreeMap<String, EraProfile>,
    #[serde(default)]
    pub positioning: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub color_standards: BTreeMap<String, ColorStandard>,
    #[serde(default)]
    pub scan_patterns: BTreeMap<String, serde_json::Value>,
}

fn default_version() -> String {
    "unversioned".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftProfile {
    #[serde(default)]
    pub examples: Vec<String>,
    pub instrument_configuration: Option<String>,
    pub panel_complexity: Option<String>,
    #[serde(default)]
    pub typical_instruments: TypicalInstruments,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypicalInstruments {
    #[serde(default)]
    pub essential: Vec<String>,
    #[serde(default)]
    pub engine: Vec<String>,
    #[serde(default)]
    pub systems: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentSpec {
    pub name: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub function: Option<String>,
    #[serde(default)]
    pub visual_elements: Vec<String>,
    #[serde(default)]
    pub color_scheme: BTreeMap<String, String>,
    /// Zone key in `Taxonomy::positioning`. Not checked for existence.
    pub typical_position: Option<String>,
    pub criticality: Option<Criticality>,
    #[serde(default)]
    pub warning_zones: BTreeMap<String, String>,
    #[serde(default)]
    pub speed_arcs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraProfile {
    pub period: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub visual_characteristics: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub advantages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStandard {
    pub color: String,
    pub meaning: String,
}
