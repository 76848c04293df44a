use anyhow::Result;
use cockpit_design_aesthetics::app::stdio::{
    serve, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
use cockpit_design_aesthetics::{CockpitService, TaxonomyStore, ToolDispatcher, ToolResponse};
use tokio::io::BufReader;

fn dispatcher() -> Result<ToolDispatcher> {
    Ok(ToolDispatcher::new(CockpitService::new(TaxonomyStore::embedded()?)))
}

async fn run(input: &str) -> Result<(Vec<ToolResponse>, usize, usize)> {
    let dispatcher = dispatcher()?;
    let mut output: Vec<u8> = Vec::new();
    let stats = serve(&dispatcher, BufReader::new(input.as_bytes()), &mut output).await?;

    let responses = String::from_utf8(output)?
        .lines()
        .map(serde_json::from_str)
        .collect::<std::result::Result<Vec<ToolResponse>, _>>()?;
    Ok((responses, stats.requests, stats.failures))
}

#[tokio::test]
async fn test_requests_are_answered_in_order() -> Result<()> {
    let input = r#"{"id": 1, "tool": "get_aircraft_type_profile", "arguments": {"aircraft_type": "fighter_jets"}}
{"id": "two", "tool": "era_profile", "arguments": {"era": "glass-cockpit"}}

{"id": 3, "tool": "get_color_standards"}
"#;

    let (responses, requests, failures) = run(input).await?;

    assert_eq!(requests, 3);
    assert_eq!(failures, 0);
    assert_eq!(responses.len(), 3);

    assert_eq!(responses[0].id, serde_json::json!(1));
    assert_eq!(responses[0].result.as_ref().unwrap()["aircraft_type"], "fighter_jets");

    assert_eq!(responses[1].id, serde_json::json!("two"));
    assert_eq!(responses[1].result.as_ref().unwrap()["era"], "glass_cockpit");

    assert_eq!(
        responses[2].result.as_ref().unwrap()["safe_normal"]["color"],
        "#00AA00"
    );
    Ok(())
}

#[tokio::test]
async fn test_not_found_travels_as_result() -> Result<()> {
    let input = r#"{"id": 7, "tool": "get_aircraft_type_profile", "arguments": {"aircraft_type": "nonexistent_aircraft"}}
"#;
    let (responses, _, failures) = run(input).await?;

    assert_eq!(failures, 0);
    let result = responses[0].result.as_ref().unwrap();
    assert!(result["error"].as_str().unwrap().contains("nonexistent_aircraft"));
    assert!(!result["available_types"].as_array().unwrap().is_empty());
    assert!(responses[0].error.is_none());
    Ok(())
}

#[tokio::test]
async fn test_transport_errors_use_error_codes() -> Result<()> {
    let input = r#"this is not json
{"id": 2, "tool": "fly_the_plane", "arguments": {}}
{"id": 3, "tool": "build_panel_specification", "arguments": {"aircraft_type": "general_aviation_singles"}}
{"id": 4, "tool": "list_available_options"}
"#;
    let (responses, requests, failures) = run(input).await?;

    assert_eq!(requests, 4);
    assert_eq!(failures, 3);

    assert_eq!(responses[0].error.as_ref().unwrap().code, PARSE_ERROR);
    assert!(responses[0].id.is_null());
    assert_eq!(responses[1].error.as_ref().unwrap().code, METHOD_NOT_FOUND);
    assert_eq!(responses[2].error.as_ref().unwrap().code, INVALID_PARAMS);
    assert!(responses[2].error.as_ref().unwrap().message.contains("panel_era"));
    assert!(responses[3].result.is_some());
    Ok(())
}

#[tokio::test]
async fn test_request_without_tool_keeps_its_id() -> Result<()> {
    let input = r#"{"id": 42, "arguments": {"aircraft_type": "fighter_jets"}}
{"id": "abc", "tool": 17}
[1, 2, 3]
"#;
    let (responses, requests, failures) = run(input).await?;

    assert_eq!((requests, failures), (3, 3));

    assert_eq!(responses[0].id, serde_json::json!(42));
    assert_eq!(responses[0].error.as_ref().unwrap().code, INVALID_REQUEST);
    assert!(responses[0].error.as_ref().unwrap().message.contains("tool"));

    assert_eq!(responses[1].id, serde_json::json!("abc"));
    assert_eq!(responses[1].error.as_ref().unwrap().code, INVALID_REQUEST);

    assert!(responses[2].id.is_null());
    assert_eq!(responses[2].error.as_ref().unwrap().code, INVALID_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_generate_prompt_over_the_wire() -> Result<()> {
    let input = r#"{"id": 1, "tool": "generate_cockpit_prompt", "arguments": {"aircraft_type": "commercial_airliners", "panel_era": "glass_cockpit", "viewing_angle": "overhead", "additional_context": "cruise at FL350"}}
{"id": 2, "tool": "list_tools"}
"#;
    let (responses, _, failures) = run(input).await?;

    assert_eq!(failures, 0);
    let prompt = responses[0].result.as_ref().unwrap();
    assert_eq!(prompt["ready_for_image_generation"], true);
    assert_eq!(
        prompt["prompt_context"]["viewing_angle"],
        "birds-eye view of full panel layout"
    );
    assert_eq!(prompt["prompt_context"]["additional_context"], "cruise at FL350");

    let tools = responses[1].result.as_ref().unwrap().as_array().unwrap();
    assert_eq!(tools.len(), 10);
    Ok(())
}

#[tokio::test]
async fn test_empty_input_serves_nothing() -> Result<()> {
    let (responses, requests, failures) = run("").await?;
    assert!(responses.is_empty());
    assert_eq!((requests, failures), (0, 0));
    Ok(())
}
