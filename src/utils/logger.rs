use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::domain::ports::LogFormat;

// stdout carries tool results, so every layer writes to stderr.

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cockpit_design_aesthetics=debug,info")
        } else {
            let level = level.unwrap_or("info");
            EnvFilter::new(format!("cockpit_design_aesthetics={},warn", level))
        }
    })
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // for log collectors that parse structured lines
        )
        .init();
}

pub fn init_logger(format: LogFormat, verbose: bool, level: Option<&str>) {
    match format {
        LogFormat::Compact => init_cli_logger(verbose, level),
        LogFormat::Json => init_json_logger(verbose, level),
    }
}
