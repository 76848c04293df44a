use clap::Subcommand;
use serde_json::{json, Map, Value};

use crate::app::tools::Tool;
use crate::core::composition::DEFAULT_DETAIL_LEVEL;
use crate::core::narrative::{DEFAULT_DETAIL_INTENSITY, DEFAULT_LIGHTING, DEFAULT_VIEWING_ANGLE};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve tool requests as JSON lines on stdin/stdout
    Serve,
    /// List the published tools and their arguments
    Tools,
    /// Instrument configuration profile for an aircraft type
    AircraftProfile { aircraft_type: String },
    /// Full specification of one instrument
    InstrumentDetails { instrument_name: String },
    /// Positioning zones and layout principles
    LayoutRules,
    /// Cockpit color conventions
    ColorStandards,
    /// Visual characteristics of a design era
    EraProfile { era: String },
    /// Every key known to the taxonomy
    Options,
    /// Instrument sets for an aircraft and mission
    SuggestInstruments {
        aircraft_type: String,
        #[arg(long)]
        mission_profile: Option<String>,
        #[arg(long)]
        complexity_level: Option<String>,
    },
    /// Unified panel specification
    PanelSpec {
        aircraft_type: String,
        panel_era: String,
        #[arg(long)]
        focus_area: Option<String>,
        #[arg(long, default_value = DEFAULT_DETAIL_LEVEL)]
        detail_level: String,
    },
    /// Prompt context for a downstream image generation step
    Prompt {
        aircraft_type: String,
        panel_era: String,
        #[arg(long, default_value = DEFAULT_VIEWING_ANGLE)]
        viewing_angle: String,
        #[arg(long, default_value = DEFAULT_LIGHTING)]
        lighting_condition: String,
        #[arg(long, default_value = DEFAULT_DETAIL_INTENSITY)]
        detail_intensity: String,
        #[arg(long)]
        additional_context: Option<String>,
    },
    /// Explain a cockpit design principle
    Explain { aspect: String },
}

/// A one-shot subcommand translated into a tool call.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Serve,
    ListTools,
    Call { tool: Tool, arguments: Value },
}

fn optional(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.clone()));
    }
}

impl Command {
    pub fn invocation(&self) -> Invocation {
        match self {
            Command::Serve => Invocation::Serve,
            Command::Tools => Invocation::ListTools,
            Command::AircraftProfile { aircraft_type } => Invocation::Call {
                tool: Tool::AircraftProfile,
                arguments: json!({ "aircraft_type": aircraft_type }),
            },
            Command::InstrumentDetails { instrument_name } => Invocation::Call {
                tool: Tool::InstrumentDetails,
                arguments: json!({ "instrument_name": instrument_name }),
            },
            Command::LayoutRules => Invocation::Call {
                tool: Tool::PanelLayoutRules,
                arguments: json!({}),
            },
            Command::ColorStandards => Invocation::Call {
                tool: Tool::ColorStandards,
                arguments: json!({}),
            },
            Command::EraProfile { era } => Invocation::Call {
                tool: Tool::EraProfile,
                arguments: json!({ "era": era }),
            },
            Command::Options => Invocation::Call {
                tool: Tool::ListAvailableOptions,
                arguments: json!({}),
            },
            Command::SuggestInstruments {
                aircraft_type,
                mission_profile,
                complexity_level,
            } => {
                let mut args = Map::new();
                args.insert("aircraft_type".to_string(), json!(aircraft_type));
                optional(&mut args, "mission_profile", mission_profile);
                optional(&mut args, "complexity_level", complexity_level);
                Invocation::Call {
                    tool: Tool::SuggestInstruments,
                    arguments: Value::Object(args),
                }
            }
            Command::PanelSpec {
                aircraft_type,
                panel_era,
                focus_area,
                detail_level,
            } => {
                let mut args = Map::new();
                args.insert("aircraft_type".to_string(), json!(aircraft_type));
                args.insert("panel_era".to_string(), json!(panel_era));
                args.insert("detail_level".to_string(), json!(detail_level));
                optional(&mut args, "focus_area", focus_area);
                Invocation::Call {
                    tool: Tool::BuildPanelSpecification,
                    arguments: Value::Object(args),
                }
            }
            Command::Prompt {
                aircraft_type,
                panel_era,
                viewing_angle,
                lighting_condition,
                detail_intensity,
                additional_context,
            } => {
                let mut args = Map::new();
                args.insert("aircraft_type".to_string(), json!(aircraft_type));
                args.insert("panel_era".to_string(), json!(panel_era));
                args.insert("viewing_angle".to_string(), json!(viewing_angle));
                args.insert("lighting_condition".to_string(), json!(lighting_condition));
                args.insert("detail_intensity".to_string(), json!(detail_intensity));
                optional(&mut args, "additional_context", additional_context);
                Invocation::Call {
                    tool: Tool::GenerateCockpitPrompt,
                    arguments: Value::Object(args),
                }
            }
            Command::Explain { aspect } => Invocation::Call {
                tool: Tool::ExplainCockpitDesign,
                arguments: json!({ "aspect": aspect }),
            },
        }
    }
}
