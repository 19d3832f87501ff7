//! Maps JSON-RPC methods onto the tool dispatcher.

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::tools::Dispatcher;

use super::protocol::{
    error_codes, methods, JsonRpcId, JsonRpcRequest, JsonRpcResponse, ToolCallParams,
    JSONRPC_VERSION, PROTOCOL_VERSION,
};

pub struct McpHandler {
    name: String,
    version: String,
    dispatcher: Dispatcher,
}

impl McpHandler {
    pub fn new(name: impl Into<String>, version: impl Into<String>, dispatcher: Dispatcher) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dispatcher,
        }
    }

    /// Handles one input line. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                return Some(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    format!("Parse error: {e}"),
                ));
            }
        };

        let id = value
            .get("id")
            .cloned()
            .and_then(|id| serde_json::from_value::<JsonRpcId>(id).ok());

        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                "Invalid JSON-RPC version",
            ));
        }

        if request.id.is_none() {
            debug!(method = %request.method, "notification handled, no response needed");
            return None;
        }

        Some(self.dispatch(request).await)
    }

    async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let JsonRpcRequest {
            id, method, params, ..
        } = request;

        match method.as_str() {
            methods::INITIALIZE => JsonRpcResponse::success(id, self.initialize_result()),
            methods::PING => JsonRpcResponse::success(id, json!({})),
            methods::TOOLS_LIST => {
                JsonRpcResponse::success(id, json!({ "tools": self.dispatcher.list_tools() }))
            }
            methods::TOOLS_CALL => self.call_tool(id, params).await,
            other => JsonRpcResponse::error(
                id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            ),
        }
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": { "name": self.name, "version": self.version }
        })
    }

    async fn call_tool(&self, id: Option<JsonRpcId>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match serde_json::from_value(params.unwrap_or(Value::Null)) {
            Ok(params) => params,
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                );
            }
        };

        let envelope = self.dispatcher.invoke(&params.name, params.arguments).await;
        match serde_json::to_value(&envelope) {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => JsonRpcResponse::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::catalog;
    use crate::testing::RecordingProvider;

    fn handler() -> McpHandler {
        let catalog = catalog::chat_server();
        let provider = Arc::new(RecordingProvider::replying("generated"));
        McpHandler::new(
            catalog.name,
            "1.2.3",
            Dispatcher::new(catalog.registry, provider),
        )
    }

    async fn call(line: &str) -> Value {
        let response = handler().handle_line(line).await.expect("a response");
        serde_json::to_value(response).unwrap()
    }

    #[tokio::test]
    async fn initialize_reports_capabilities_and_identity() {
        let response = call(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#).await;
        assert_eq!(
            response,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "protocolVersion": "2024-11-05",
                    "capabilities": {"tools": {}},
                    "serverInfo": {"name": "gemini-mcp-server", "version": "1.2.3"}
                }
            })
        );
    }

    #[tokio::test]
    async fn tools_list_advertises_schemas_in_order() {
        let response = call(r#"{"jsonrpc":"2.0","id":"a","method":"tools/list"}"#).await;
        let tools = response["result"]["tools"].as_array().unwrap();
        let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(
            names,
            vec!["gemini_chat", "gemini_chat_with_history", "gemini_analyze_code"]
        );
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
        assert_eq!(tools[0]["inputSchema"]["required"], json!(["message"]));
        assert_eq!(
            tools[0]["inputSchema"]["properties"]["temperature"]["default"],
            json!(1.0)
        );
        assert_eq!(
            tools[2]["inputSchema"]["properties"]["analysis_type"]["enum"],
            json!(["bugs", "optimize", "explain", "review"])
        );
    }

    #[tokio::test]
    async fn tools_call_returns_the_envelope() {
        let response = call(
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"gemini_chat","arguments":{"message":"hi"}}}"#,
        )
        .await;
        assert_eq!(
            response["result"],
            json!({"content": [{"type": "text", "text": "generated"}], "isError": false})
        );
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error_envelope_not_a_protocol_error() {
        let response = call(
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"nope"}}"#,
        )
        .await;
        assert!(response.get("error").is_none());
        assert_eq!(response["result"]["isError"], json!(true));
        assert_eq!(
            response["result"]["content"][0]["text"],
            json!("Error: Unknown tool: nope")
        );
    }

    #[tokio::test]
    async fn tools_call_without_name_is_invalid_params() {
        let response = call(r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{}}"#).await;
        assert_eq!(response["error"]["code"], json!(error_codes::INVALID_PARAMS));
        assert_eq!(response["id"], json!(4));
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error_with_null_id() {
        let response = call("{not json").await;
        assert_eq!(response["error"]["code"], json!(error_codes::PARSE_ERROR));
        assert_eq!(response["id"], Value::Null);
    }

    #[tokio::test]
    async fn wrong_version_is_an_invalid_request() {
        let response = call(r#"{"jsonrpc":"1.0","id":5,"method":"ping"}"#).await;
        assert_eq!(response["error"]["code"], json!(error_codes::INVALID_REQUEST));
        assert_eq!(response["id"], json!(5));
    }

    #[tokio::test]
    async fn request_without_method_is_an_invalid_request() {
        let response = call(r#"{"jsonrpc":"2.0","id":6}"#).await;
        assert_eq!(response["error"]["code"], json!(error_codes::INVALID_REQUEST));
        assert_eq!(response["id"], json!(6));
    }

    #[tokio::test]
    async fn unknown_method_is_method_not_found() {
        let response = call(r#"{"jsonrpc":"2.0","id":7,"method":"resources/list"}"#).await;
        assert_eq!(response["error"]["code"], json!(error_codes::METHOD_NOT_FOUND));
    }

    #[tokio::test]
    async fn ping_returns_an_empty_object() {
        let response = call(r#"{"jsonrpc":"2.0","id":8,"method":"ping"}"#).await;
        assert_eq!(response["result"], json!({}));
    }

    #[tokio::test]
    async fn notifications_get_no_response() {
        let handler = handler();
        assert!(handler
            .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await
            .is_none());
        assert!(handler
            .handle_line(r#"{"jsonrpc":"2.0","method":"tools/call","params":{"name":"gemini_chat"}}"#)
            .await
            .is_none());
    }
}
