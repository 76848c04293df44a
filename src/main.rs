use clap::Parser;
use cockpit_design_aesthetics::adapters::source_for;
use cockpit_design_aesthetics::app::stdio::serve_stdio;
use cockpit_design_aesthetics::config::cli::Invocation;
use cockpit_design_aesthetics::domain::ports::ConfigProvider;
use cockpit_design_aesthetics::utils::{logger, validation::Validate};
use cockpit_design_aesthetics::{
    CliConfig, CockpitError, CockpitService, EffectiveConfig, ServiceConfig, TaxonomyStore,
    ToolDispatcher,
};

fn fail(stage: &str, e: &CockpitError) -> ! {
    tracing::error!("❌ {} failed: {}", stage, e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入設定檔 (選用)
    let file = match cli.config.as_deref() {
        Some(path) => match ServiceConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => ServiceConfig::default(),
    };

    let config = EffectiveConfig { cli, file };

    // 初始化日誌
    logger::init_logger(config.log_format(), config.cli.verbose, config.log_level());

    tracing::info!("Starting {}", config.file.service_name());
    if config.cli.verbose {
        tracing::debug!("CLI config: {:?}", config.cli);
    }

    // 驗證配置
    if let Err(e) = config.file.validate() {
        fail("Configuration validation", &e);
    }

    // 分類資料只在啟動時載入一次
    let source = source_for(config.taxonomy_path());
    let store = match TaxonomyStore::load(source.as_ref()) {
        Ok(store) => store,
        Err(e) => fail("Taxonomy load", &e),
    };

    let dispatcher = ToolDispatcher::new(CockpitService::new(store));

    match config.cli.command.invocation() {
        Invocation::Serve => {
            tracing::info!("Serving tool requests on stdin/stdout");
            if let Err(e) = serve_stdio(&dispatcher).await {
                fail("Tool server", &e);
            }
        }
        Invocation::ListTools => {
            println!("{}", serde_json::to_string_pretty(&dispatcher.list_tools())?);
        }
        Invocation::Call { tool, arguments } => match dispatcher.call_tool(tool, arguments) {
            Ok(result) => println!("{}", serde_json::to_string_pretty(&result)?),
            Err(e) => fail(tool.name(), &e),
        },
    }

    Ok(())
}
