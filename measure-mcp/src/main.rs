//! Measure MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdio.
//!
//! Tools:
//! - convert: Convert a value between two units of the same category
//! - list_units: List unit names, grouped by category
//! - list_categories: List the measurement categories

mod config;

use std::io::{self, BufRead, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use measure_core::{MeasureError, RawValue};
use measure_units::{convert_detailed, list_categories, list_units};
use measure_widget::{format_result, unit_groups, Notice};
use config::Config;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "measure";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn parse_error(details: impl std::fmt::Display) -> Self {
        McpError { code: -32700, message: format!("Parse error: {}", details), data: None }
    }

    fn method_not_found(method: &str) -> Self {
        McpError { code: -32601, message: format!("Method not found: {}", method), data: None }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        McpError { code: -32602, message: message.into(), data: None }
    }
}

impl McpResponse {
    fn new(id: Option<JsonValue>, result: Result<JsonValue, McpError>) -> Self {
        match result {
            Ok(r) => McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(r), error: None },
            Err(e) => McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(e) },
        }
    }
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    let config = Config::from_env();
    init_logging(&config);

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "Measure MCP Server started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = serve(stdin.lock(), stdout.lock()) {
        warn!(error = %e, "I/O error, stopping");
    }

    info!("Server shutting down");
}

/// Read requests line by line until EOF, writing one response line per request
fn serve<R: BufRead, W: Write>(reader: R, mut writer: W) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(bytes = line.len(), "Received request");

        let request: McpRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Error parsing request");
                let response = McpResponse::new(None, Err(McpError::parse_error(e)));
                write_response(&mut writer, &response)?;
                continue;
            }
        };

        debug!(method = %request.method, "Processing");
        let response = handle_request(&request);

        // Notifications (no id) do not receive a response
        if request.id.is_none() {
            debug!(method = %request.method, "Notification processed");
            continue;
        }

        write_response(&mut writer, &response)?;
    }

    info!("Client disconnected (EOF)");
    Ok(())
}

fn write_response<W: Write>(writer: &mut W, response: &McpResponse) -> io::Result<()> {
    let response_json = serde_json::to_string(response)?;
    writeln!(writer, "{}", response_json)?;
    writer.flush()
}

fn handle_request(request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(&request.params),

        _ => Err(McpError::method_not_found(&request.method)),
    };

    McpResponse::new(request.id.clone(), result)
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "Client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Length, weight and volume unit conversion"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use 'list_units' to see the exact unit names, then 'convert' with a value and two unit names from the same category."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    let names: Vec<&str> = unit_groups().into_iter().flat_map(|g| g.units).collect();
    let category_ids: Vec<&str> = list_categories().iter().map(|c| c.id()).collect();

    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value from one unit to another within the same category (length, weight, volume).",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": {
                            "type": ["number", "string"],
                            "description": "Value to convert"
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Source unit, e.g. \"Feet (ft)\"",
                            "enum": names
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Target unit, e.g. \"Inches (in)\"",
                            "enum": names
                        }
                    },
                    "required": ["value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "list_units",
                "description": "List unit names grouped by category, optionally for one category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Filter by category",
                            "enum": category_ids
                        }
                    }
                }
            },
            {
                "name": "list_categories",
                "description": "List the measurement categories.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            }
        ]
    }))
}

fn handle_tool_call(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "convert" => tool_convert(args),
        "list_units" => tool_list_units(args),
        "list_categories" => tool_list_categories(),
        _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
    }
}

fn tool_convert(args: JsonValue) -> Result<JsonValue, McpError> {
    // An explicit null is an empty entry, same as leaving the value out.
    let value = match args.get("value").filter(|v| !v.is_null()) {
        Some(v) => serde_json::from_value::<RawValue>(v.clone())
            .map_err(|_| McpError::invalid_params("value must be a number or a string"))?,
        None => RawValue::Text(String::new()),
    };
    let from_unit = args.get("from_unit").and_then(|v| v.as_str());
    let to_unit = args.get("to_unit").and_then(|v| v.as_str());

    match convert_detailed(value, from_unit, to_unit) {
        Ok(conversion) => {
            let display = format_result(Some(conversion.result));
            let text = format!("{} {} = {} {}",
                conversion.value, conversion.from, display, conversion.to);
            Ok(json!({
                "content": [{ "type": "text", "text": text }],
                "result": conversion.result,
                "display": display,
                "category": conversion.category,
                "isError": false
            }))
        }
        Err(e) => {
            debug!(code = e.code(), "Conversion failed");
            Ok(tool_error(&e))
        }
    }
}

fn tool_list_units(args: JsonValue) -> Result<JsonValue, McpError> {
    match args.get("category").and_then(|v| v.as_str()) {
        Some(category) => match list_units(category) {
            Ok(units) => {
                let names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
                let mut data = serde_json::Map::new();
                data.insert(category.to_string(), json!(names));
                Ok(json!({
                    "content": [{ "type": "text", "text": names.join("\n") }],
                    "data": data,
                    "isError": false
                }))
            }
            Err(e) => Ok(tool_error(&e)),
        },
        None => {
            let groups = unit_groups();
            let text = groups.iter()
                .map(|g| format!("{}: {}", g.label, g.units.join(", ")))
                .collect::<Vec<_>>()
                .join("\n");
            Ok(json!({
                "content": [{ "type": "text", "text": text }],
                "data": groups,
                "isError": false
            }))
        }
    }
}

fn tool_list_categories() -> Result<JsonValue, McpError> {
    let categories = list_categories();
    let text = categories.iter().map(|c| c.label()).collect::<Vec<_>>().join(", ");
    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "data": categories,
        "isError": false
    }))
}

fn tool_error(err: &MeasureError) -> JsonValue {
    let notice = Notice::from(err);
    json!({
        "content": [{ "type": "text", "text": notice.message }],
        "error": err,
        "isError": true
    })
}
