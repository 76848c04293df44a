//! JSON-lines request/response loop.
//!
//! One request object per input line, one response object per output line.
//! Requests are answered strictly in order.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::tools::ToolDispatcher;
use crate::utils::error::{CockpitError, Result};

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

#[derive(Debug, Deserialize)]
pub struct ToolRequest {
    #[serde(default)]
    pub id: Value,
    pub tool: String,
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolFailure {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToolResponse {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ToolFailure>,
}

impl ToolResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, code: i32, message: String) -> Self {
        Self {
            id,
            result: None,
            error: Some(ToolFailure { code, message }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    pub requests: usize,
    pub failures: usize,
}

fn error_code(err: &CockpitError) -> i32 {
    match err {
        CockpitError::UnknownToolError { .. } => METHOD_NOT_FOUND,
        CockpitError::InvalidArgumentsError { .. } => INVALID_PARAMS,
        CockpitError::SerializationError(_) => PARSE_ERROR,
        _ => INTERNAL_ERROR,
    }
}

/// Handles one raw line. Never fails: every problem becomes an error response.
pub fn handle_line(dispatcher: &ToolDispatcher, line: &str) -> ToolResponse {
    let raw: Value = match serde_json::from_str(line) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Rejected malformed request: {}", e);
            return ToolResponse::failure(Value::Null, PARSE_ERROR, format!("Parse error: {}", e));
        }
    };

    // Well-formed JSON keeps its id even when the request shape is wrong.
    let id = raw.get("id").cloned().unwrap_or(Value::Null);
    let request: ToolRequest = match serde_json::from_value(raw) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejected invalid request {}: {}", id, e);
            return ToolResponse::failure(id, INVALID_REQUEST, format!("Invalid request: {}", e));
        }
    };

    match dispatcher.call(&request.tool, request.arguments) {
        Ok(result) => ToolResponse::success(request.id, result),
        Err(e) => {
            tracing::warn!("Tool '{}' failed: {}", request.tool, e);
            ToolResponse::failure(request.id, error_code(&e), e.to_string())
        }
    }
}

pub async fn serve<R, W>(dispatcher: &ToolDispatcher, reader: R, mut writer: W) -> Result<ServeStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = ServeStats::default();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(dispatcher, line);
        stats.requests += 1;
        if response.error.is_some() {
            stats.failures += 1;
        }

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }

    tracing::info!(
        "Input closed after {} requests ({} failed)",
        stats.requests,
        stats.failures
    );
    Ok(stats)
}

/// Serves on the process's stdin/stdout until stdin closes.
pub async fn serve_stdio(dispatcher: &ToolDispatcher) -> Result<ServeStats> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    serve(dispatcher, stdin, stdout).await
}
