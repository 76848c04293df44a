//! Narrative layer: turns a panel specification into prompt context for a
//! downstream text/image generation step, plus canned design explanations.

use crate::core::composition::{non_empty, DEFAULT_FOCUS_AREA, DETAIL_COMPREHENSIVE};
use crate::core::service::CockpitService;
use crate::domain::results::{Composition, Lookup, NotFound};
use crate::domain::views::{
    CockpitPrompt, ColorConventions, DesignExplanation, Explanation, PromptContext,
    SynthesisGuidance,
};

pub const DEFAULT_VIEWING_ANGLE: &str = "front_center";
pub const DEFAULT_LIGHTING: &str = "daytime";
pub const DEFAULT_DETAIL_INTENSITY: &str = "realistic";

const MAX_KEY_INSTRUMENTS: usize = 4;

const VIEWING_ANGLES: [(&str, &str); 4] = [
    ("front_center", "straight-on view centered on the instrument panel"),
    ("pilot_view", "from pilot seat perspective, slightly off-center"),
    ("oblique", "45-degree angle showing left side instruments"),
    ("overhead", "birds-eye view of full panel layout"),
];

const LIGHTING_CONDITIONS: [(&str, &str); 4] = [
    ("daytime", "natural daylight streaming through windscreen"),
    ("instrument_lit", "instruments glowing with internal panel lighting"),
    ("twilight", "soft ambient light with instrument glow becoming prominent"),
    ("night", "complete darkness except for instrument backlighting and external lights"),
];

const COLOR_CONVENTIONS: ColorConventions = ColorConventions {
    warnings: "red lines and indicators for critical limits",
    normal: "green arcs for normal operating ranges",
    cautions: "yellow bands for caution zones",
    neutral: "white backgrounds with black text and scales",
};

const FIXED_DESIGN_PRINCIPLES: [&str; 4] = [
    "Attitude indicator prominently centered",
    "Altitude and airspeed flanking attitude indicator",
    "Organized layout minimizing pilot eye movement",
    "Color-coded zones for immediate comprehension",
];

/// Unknown keys fall back to the caller's value verbatim.
fn describe<'a>(table: &[(&str, &'static str)], key: &'a str) -> &'a str {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, text)| *text)
        .unwrap_or(key)
}

fn spaced(key: &str) -> String {
    key.replace('_', " ")
}

static EXPLANATIONS: [(&str, Explanation); 4] = [
    (
        "scanning_logic",
        Explanation {
            principle: "The 'Basic T' scan pattern",
            description: "Pilots scan instruments in a T-shaped pattern: attitude indicator at center, with altitude/airspeed on sides, heading/VSI below",
            why: "Minimizes eye movement and keeps critical flight information in primary scan area",
            instruments: Some(&[
                "attitude_indicator",
                "airspeed_indicator",
                "altimeter",
                "heading_indicator",
                "vertical_speed_indicator",
            ]),
            speed_arcs_example: None,
            scan_pattern_supported: None,
            examples: None,
        },
    ),
    (
        "color_conventions",
        Explanation {
            principle: "Immediate visual comprehension",
            description: "Red = critical/warning, Yellow = caution, Green = normal, White = neutral data",
            why: "Pilots can interpret instrument status at a glance without reading exact numbers during high-workload situations",
            instruments: None,
            speed_arcs_example: Some("Airspeed indicator has white, green, yellow, and red arcs showing flap limits, normal range, caution, and never-exceed"),
            scan_pattern_supported: None,
            examples: None,
        },
    ),
    (
        "positioning_rationale",
        Explanation {
            principle: "Functional grouping with proximity priority",
            description: "Primary flight instruments cluster in center; engine instruments below/right; systems and nav instruments in periphery",
            why: "Frequent-use instruments are central, reducing scan distance. Related functions grouped reduces context-switching",
            instruments: None,
            speed_arcs_example: None,
            scan_pattern_supported: Some("T-shaped scan minimizes eye fatigue and mental load"),
            examples: None,
        },
    ),
    (
        "instrument_redundancy",
        Explanation {
            principle: "Safety through multiple independent sources",
            description: "Attitude, altitude, and airspeed each displayed through multiple instruments",
            why: "If one instrument fails, pilot can cross-check with others and maintain situational awareness",
            instruments: None,
            speed_arcs_example: None,
            scan_pattern_supported: None,
            examples: Some(&[
                "Attitude from both attitude indicator and turn coordinator",
                "Altitude from altimeter and VSI trend",
                "Heading from compass and heading indicator",
            ]),
        },
    ),
];

/// Options for [`CockpitService::generate_cockpit_prompt`].
#[derive(Debug, Clone)]
pub struct PromptOptions<'a> {
    pub viewing_angle: &'a str,
    pub lighting_condition: &'a str,
    pub detail_intensity: &'a str,
    pub additional_context: Option<&'a str>,
}

impl Default for PromptOptions<'_> {
    fn default() -> Self {
        Self {
            viewing_angle: DEFAULT_VIEWING_ANGLE,
            lighting_condition: DEFAULT_LIGHTING,
            detail_intensity: DEFAULT_DETAIL_INTENSITY,
            additional_context: None,
        }
    }
}

impl CockpitService {
    pub fn generate_cockpit_prompt(
        &self,
        aircraft_type: &str,
        panel_era: &str,
        options: &PromptOptions<'_>,
    ) -> Composition<CockpitPrompt> {
        let spec = match self.build_panel_specification(
            aircraft_type,
            panel_era,
            Some(DEFAULT_FOCUS_AREA),
            DETAIL_COMPREHENSIVE,
        ) {
            Composition::Built(spec) => spec,
            Composition::Invalid(err) => return Composition::Invalid(err),
        };

        // Unresolvable instrument keys are dropped silently.
        let key_instruments: Vec<_> = spec
            .instruments
            .iter()
            .take(MAX_KEY_INSTRUMENTS)
            .filter_map(|name| self.instrument_details(name).into_found())
            .collect();

        tracing::debug!(
            "Prompt context for '{}' ({}) with {} key instruments",
            aircraft_type,
            panel_era,
            key_instruments.len()
        );

        let mut design_principles: Vec<String> =
            FIXED_DESIGN_PRINCIPLES.iter().map(|s| s.to_string()).collect();
        design_principles.push(format!("{} aesthetic with authentic details", spaced(panel_era)));

        let prompt_context = PromptContext {
            subject: format!("{} cockpit instrument panel", spaced(aircraft_type)),
            era_characteristics: spec.era_characteristics,
            materials: spec.materials,
            viewing_angle: describe(&VIEWING_ANGLES, options.viewing_angle).to_string(),
            lighting: describe(&LIGHTING_CONDITIONS, options.lighting_condition).to_string(),
            key_instruments,
            color_conventions: COLOR_CONVENTIONS,
            design_principles,
            additional_context: non_empty(options.additional_context).map(str::to_string),
        };

        Composition::Built(CockpitPrompt {
            prompt_context,
            synthesis_guidance: SynthesisGuidance {
                tone: "technical and precise yet visually striking",
                detail_level: options.detail_intensity.to_string(),
                focus: "instrument panel authenticity and visual hierarchy",
                avoid: "overly stylized or inaccurate instrument designs",
            },
            ready_for_image_generation: true,
            recommended_next_step:
                "Pass this context to a text-generation model to synthesize the final vivid prompt",
        })
    }

    pub fn explain_cockpit_design(&self, aspect: &str) -> Lookup<DesignExplanation> {
        match EXPLANATIONS.iter().find(|(name, _)| *name == aspect) {
            Some((name, explanation)) => Lookup::Found(DesignExplanation {
                aspect: name.to_string(),
                explanation: explanation.clone(),
            }),
            None => Lookup::NotFound(NotFound::new(
                format!("Unknown aspect '{}'", aspect),
                "available_aspects",
                EXPLANATIONS.iter().map(|(name, _)| name.to_string()).collect(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_falls_back_to_raw_value() {
        assert_eq!(
            describe(&VIEWING_ANGLES, "pilot_view"),
            "from pilot seat perspective, slightly off-center"
        );
        assert_eq!(describe(&VIEWING_ANGLES, "from the tail"), "from the tail");
        assert_eq!(describe(&LIGHTING_CONDITIONS, "Night"), "Night");
    }

    #[test]
    fn test_spaced() {
        assert_eq!(spaced("hud_integration"), "hud integration");
    }
}
