//! Tool registry and dispatcher.
//!
//! Every operation is exposed as a named tool taking a JSON object of
//! arguments. NotFound and CompositionInvalid come back as ordinary `Ok`
//! payloads; only unknown tools and malformed arguments are `Err`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::core::composition::DEFAULT_DETAIL_LEVEL;
use crate::core::narrative::{DEFAULT_DETAIL_INTENSITY, DEFAULT_LIGHTING, DEFAULT_VIEWING_ANGLE};
use crate::core::{CockpitService, PromptOptions};
use crate::utils::error::{CockpitError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    AircraftProfile,
    InstrumentDetails,
    PanelLayoutRules,
    ColorStandards,
    EraProfile,
    ListAvailableOptions,
    SuggestInstruments,
    BuildPanelSpecification,
    GenerateCockpitPrompt,
    ExplainCockpitDesign,
}

impl Tool {
    pub const ALL: [Tool; 10] = [
        Tool::AircraftProfile,
        Tool::InstrumentDetails,
        Tool::PanelLayoutRules,
        Tool::ColorStandards,
        Tool::EraProfile,
        Tool::ListAvailableOptions,
        Tool::SuggestInstruments,
        Tool::BuildPanelSpecification,
        Tool::GenerateCockpitPrompt,
        Tool::ExplainCockpitDesign,
    ];

    /// The name published to tool clients.
    pub fn name(self) -> &'static str {
        match self {
            Tool::AircraftProfile => "get_aircraft_type_profile",
            Tool::InstrumentDetails => "get_instrument_details",
            Tool::PanelLayoutRules => "get_panel_layout_rules",
            Tool::ColorStandards => "get_color_standards",
            Tool::EraProfile => "get_era_profile",
            Tool::ListAvailableOptions => "list_available_options",
            Tool::SuggestInstruments => "suggest_instruments",
            Tool::BuildPanelSpecification => "build_panel_specification",
            Tool::GenerateCockpitPrompt => "generate_cockpit_prompt",
            Tool::ExplainCockpitDesign => "explain_cockpit_design",
        }
    }

    /// Short operation name, accepted as an alias.
    pub fn operation(self) -> &'static str {
        match self {
            Tool::AircraftProfile => "aircraft_profile",
            Tool::InstrumentDetails => "instrument_details",
            Tool::PanelLayoutRules => "panel_layout_rules",
            Tool::ColorStandards => "color_standards",
            Tool::EraProfile => "era_profile",
            other => other.name(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tool::AircraftProfile => "Get instrument configuration profile for aircraft type.",
            Tool::InstrumentDetails => "Get complete specifications for a single instrument.",
            Tool::PanelLayoutRules => "Get spatial positioning rules for instrument panels.",
            Tool::ColorStandards => "Get standard cockpit color conventions.",
            Tool::EraProfile => "Get visual characteristics for a specific era of cockpit design.",
            Tool::ListAvailableOptions => "Get all available options across all dimensions.",
            Tool::SuggestInstruments => "Suggest instruments for a given aircraft type and mission.",
            Tool::BuildPanelSpecification => {
                "Build complete semantic bridge for cockpit panel design."
            }
            Tool::GenerateCockpitPrompt => "Generate vivid image generation prompt for a cockpit.",
            Tool::ExplainCockpitDesign => "Explain cockpit design principles.",
        }
    }

    fn required_args(self) -> &'static [&'static str] {
        match self {
            Tool::AircraftProfile | Tool::SuggestInstruments => &["aircraft_type"],
            Tool::InstrumentDetails => &["instrument_name"],
            Tool::EraProfile => &["era"],
            Tool::BuildPanelSpecification | Tool::GenerateCockpitPrompt => {
                &["aircraft_type", "panel_era"]
            }
            Tool::ExplainCockpitDesign => &["aspect"],
            Tool::PanelLayoutRules | Tool::ColorStandards | Tool::ListAvailableOptions => &[],
        }
    }

    fn optional_args(self) -> &'static [&'static str] {
        match self {
            Tool::SuggestInstruments => &["mission_profile", "complexity_level"],
            Tool::BuildPanelSpecification => &["focus_area", "detail_level"],
            Tool::GenerateCockpitPrompt => &[
                "viewing_angle",
                "lighting_condition",
                "detail_intensity",
                "additional_context",
            ],
            _ => &[],
        }
    }

    pub fn descriptor(self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name(),
            description: self.description(),
            required: self.required_args(),
            optional: self.optional_args(),
        }
    }
}

impl FromStr for Tool {
    type Err = CockpitError;

    fn from_str(s: &str) -> Result<Self> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == s || tool.operation() == s)
            .ok_or_else(|| CockpitError::UnknownToolError {
                tool: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

// Argument shapes, one per tool that takes any.

#[derive(Debug, Deserialize)]
struct AircraftArgs {
    aircraft_type: String,
}

#[derive(Debug, Deserialize)]
struct InstrumentArgs {
    instrument_name: String,
}

#[derive(Debug, Deserialize)]
struct EraArgs {
    era: String,
}

#[derive(Debug, Deserialize)]
struct SuggestArgs {
    aircraft_type: String,
    mission_profile: Option<String>,
    complexity_level: Option<String>,
}

fn default_detail_level() -> String {
    DEFAULT_DETAIL_LEVEL.to_string()
}

#[derive(Debug, Deserialize)]
struct PanelSpecArgs {
    aircraft_type: String,
    panel_era: String,
    focus_area: Option<String>,
    #[serde(default = "default_detail_level")]
    detail_level: String,
}

fn default_viewing_angle() -> String {
    DEFAULT_VIEWING_ANGLE.to_string()
}

fn default_lighting() -> String {
    DEFAULT_LIGHTING.to_string()
}

fn default_detail_intensity() -> String {
    DEFAULT_DETAIL_INTENSITY.to_string()
}

#[derive(Debug, Deserialize)]
struct PromptArgs {
    aircraft_type: String,
    panel_era: String,
    #[serde(default = "default_viewing_angle")]
    viewing_angle: String,
    #[serde(default = "default_lighting")]
    lighting_condition: String,
    #[serde(default = "default_detail_intensity")]
    detail_intensity: String,
    additional_context: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AspectArgs {
    aspect: String,
}

fn parse_args<T: DeserializeOwned>(tool: Tool, arguments: Value) -> Result<T> {
    // A missing or null arguments field means "no arguments".
    let arguments = match arguments {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| CockpitError::InvalidArgumentsError {
        tool: tool.name().to_string(),
        message: e.to_string(),
    })
}

#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    service: CockpitService,
}

impl ToolDispatcher {
    pub fn new(service: CockpitService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &CockpitService {
        &self.service
    }

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        Tool::ALL.into_iter().map(Tool::descriptor).collect()
    }

    /// Resolves `tool_name` and runs it. `list_tools` is handled here too.
    pub fn call(&self, tool_name: &str, arguments: Value) -> Result<Value> {
        if tool_name == "list_tools" {
            return Ok(serde_json::to_value(self.list_tools())?);
        }
        let tool = tool_name.parse::<Tool>()?;
        tracing::debug!("Calling tool {}", tool.name());
        self.call_tool(tool, arguments)
    }

    pub fn call_tool(&self, tool: Tool, arguments: Value) -> Result<Value> {
        let service = &self.service;
        let value = match tool {
            Tool::AircraftProfile => {
                let args: AircraftArgs = parse_args(tool, arguments)?;
                serde_json::to_value(service.aircraft_profile(&args.aircraft_type))?
            }
            Tool::InstrumentDetails => {
                let args: InstrumentArgs = parse_args(tool, arguments)?;
                serde_json::to_value(service.instrument_details(&args.instrument_name))?
            }
            Tool::PanelLayoutRules => serde_json::to_value(service.panel_layout_rules())?,
            Tool::ColorStandards => serde_json::to_value(service.color_standards())?,
            Tool::EraProfile => {
                let args: EraArgs = parse_args(tool, arguments)?;
                serde_json::to_value(service.era_profile(&args.era))?
            }
            Tool::ListAvailableOptions => serde_json::to_value(service.list_available_options())?,
            Tool::SuggestInstruments => {
                let args: SuggestArgs = parse_args(tool, arguments)?;
                serde_json::to_value(service.suggest_instruments(
                    &args.aircraft_type,
                    args.mission_profile.as_deref(),
                    args.complexity_level.as_deref(),
                ))?
            }
            Tool::BuildPanelSpecification => {
                let args: PanelSpecArgs = parse_args(tool, arguments)?;
                serde_json::to_value(service.build_panel_specification(
                    &args.aircraft_type,
                    &args.panel_era,
                    args.focus_area.as_deref(),
                    &args.detail_level,
                ))?
            }
            Tool::GenerateCockpitPrompt => {
                let args: PromptArgs = parse_args(tool, arguments)?;
                let options = PromptOptions {
                    viewing_angle: &args.viewing_angle,
                    lighting_condition: &args.lighting_condition,
                    detail_intensity: &args.detail_intensity,
                    additional_context: args.additional_context.as_deref(),
                };
                serde_json::to_value(service.generate_cockpit_prompt(
                    &args.aircraft_type,
                    &args.panel_era,
                    &options,
                ))?
            }
            Tool::ExplainCockpitDesign => {
                let args: AspectArgs = parse_args(tool, arguments)?;
                serde_json::to_value(service.explain_cockpit_design(&args.aspect))?
            }
        };
        Ok(value)
    }
}
