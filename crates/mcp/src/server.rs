//! MCP server loop (newline-delimited JSON-RPC over stdio).

use std::future::Future;
use std::sync::Arc;

use serde_json::{Value, json};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::protocol::{
    CallToolParams, CallToolResult, INVALID_REQUEST, InitializeParams, InitializeResult,
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListToolsResult, METHOD_NOT_FOUND, PARSE_ERROR,
    PROTOCOL_VERSION, ServerCapabilities, ServerInfo, Tool, ToolsCapability,
};

/// Maximum accepted size of a single request line (1MB).
pub const MAX_MESSAGE_SIZE: usize = 1024 * 1024;

/// Trait for whatever answers `tools/list` and `tools/call`.
///
/// This is the boundary between the protocol loop and the tools themselves.
pub trait ToolHandler: Send + Sync + 'static {
    /// Tools advertised to the client.
    fn list_tools(&self) -> Vec<Tool>;

    /// Run a tool. Tool-level failures belong in the returned result
    /// (`is_error`); `Err` is reserved for protocol failures such as an
    /// unknown tool name.
    fn call_tool(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> impl Future<Output = Result<CallToolResult>> + Send;
}

/// An MCP server wrapping a [`ToolHandler`].
pub struct Server<H> {
    info: ServerInfo,
    handler: Arc<H>,
}

impl<H: ToolHandler> Server<H> {
    pub fn new(name: impl Into<String>, version: impl Into<String>, handler: H) -> Self {
        Self {
            info: ServerInfo {
                name: name.into(),
                version: version.into(),
            },
            handler: Arc::new(handler),
        }
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn serve_stdio(self) -> Result<()> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve requests read line by line from `reader`, writing one response
    /// line per request to `writer`.
    ///
    /// At most [`MAX_MESSAGE_SIZE`] bytes of a line are buffered; the rest
    /// of a longer line is skipped and answered with an invalid-request error.
    ///
    /// Each request runs on its own task; responses may therefore arrive
    /// out of request order. Returns once the reader hits EOF and every
    /// in-flight request has been answered.
    pub async fn serve<R, W>(self, mut reader: R, writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!(server = %self.info.name, "MCP server started");

        let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
        let writer_task = tokio::spawn(write_responses(rx, writer));

        let info = Arc::new(self.info);
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = (&mut reader)
                .take(MAX_MESSAGE_SIZE as u64 + 1)
                .read_until(b'\n', &mut buf)
                .await?;
            if read == 0 {
                break;
            }
            if !buf.ends_with(b"\n") && buf.len() > MAX_MESSAGE_SIZE {
                let skipped = skip_line(&mut reader).await?;
                warn!(size = buf.len() + skipped, "dropping oversized message");
                let error = JsonRpcError::new(INVALID_REQUEST, "message too large");
                let _ = tx.send(JsonRpcResponse::failure(None, error));
                continue;
            }

            let line = buf.trim_ascii();
            if line.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_slice(line) {
                Ok(request) => request,
                Err(e) => {
                    warn!(error = %e, "malformed JSON-RPC message");
                    let error = JsonRpcError::new(PARSE_ERROR, format!("parse error: {e}"));
                    let _ = tx.send(JsonRpcResponse::failure(None, error));
                    continue;
                }
            };

            let handler = Arc::clone(&self.handler);
            let info = Arc::clone(&info);
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = dispatch(handler.as_ref(), &info, request).await {
                    let _ = tx.send(response);
                }
            });
        }

        // Writer drains until every task holding a sender is done.
        drop(tx);
        writer_task.await.map_err(std::io::Error::other)??;

        info!("MCP server stopped");
        Ok(())
    }
}

/// Consume the remainder of the current line, newline included.
/// Returns the number of bytes skipped.
async fn skip_line<R: AsyncBufRead + Unpin>(reader: &mut R) -> std::io::Result<usize> {
    let mut skipped = 0;
    loop {
        let (newline, available) = {
            let chunk = reader.fill_buf().await?;
            (chunk.iter().position(|&b| b == b'\n'), chunk.len())
        };
        match newline {
            Some(at) => {
                reader.consume(at + 1);
                return Ok(skipped + at + 1);
            }
            None if available == 0 => return Ok(skipped),
            None => {
                reader.consume(available);
                skipped += available;
            }
        }
    }
}

async fn write_responses<W>(
    mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>,
    mut writer: W,
) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let json = serde_json::to_string(&response)?;
        writer.write_all(json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }
    Ok(())
}

async fn dispatch<H: ToolHandler>(
    handler: &H,
    info: &ServerInfo,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    let Some(id) = request.id.clone() else {
        debug!(method = %request.method, "notification");
        return None;
    };

    if request.jsonrpc != "2.0" {
        let error = JsonRpcError::new(INVALID_REQUEST, "jsonrpc must be \"2.0\"");
        return Some(JsonRpcResponse::failure(id, error));
    }

    let response = match request.method.as_str() {
        "initialize" => match request.params::<InitializeParams>() {
            Ok(params) => {
                if let Some(client) = &params.client_info {
                    info!(
                        client = %client.name,
                        version = ?params.protocol_version,
                        "client connected"
                    );
                }
                JsonRpcResponse::success(id, initialize_result(info))
            }
            Err(error) => JsonRpcResponse::failure(id, error),
        },
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => JsonRpcResponse::success(
            id,
            ListToolsResult {
                tools: handler.list_tools(),
            },
        ),
        "tools/call" => match request.params::<CallToolParams>() {
            Ok(params) => match handler.call_tool(&params.name, params.arguments).await {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(e) => {
                    warn!(tool = %params.name, error = %e, "tool call rejected");
                    JsonRpcResponse::failure(id, e.to_rpc_error())
                }
            },
            Err(error) => JsonRpcResponse::failure(id, error),
        },
        other => {
            let error = JsonRpcError::new(METHOD_NOT_FOUND, format!("method not found: {other}"));
            JsonRpcResponse::failure(id, error)
        }
    };
    Some(response)
}

fn initialize_result(info: &ServerInfo) -> InitializeResult {
    InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability::default()),
        },
        server_info: info.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tokio::io::AsyncReadExt;

    struct EchoHandler;

    impl ToolHandler for EchoHandler {
        fn list_tools(&self) -> Vec<Tool> {
            vec![Tool {
                name: "echo".to_string(),
                description: Some("Echo the input".to_string()),
                input_schema: json!({"type": "object"}),
            }]
        }

        async fn call_tool(
            &self,
            name: &str,
            arguments: Option<Value>,
        ) -> Result<CallToolResult> {
            match name {
                "echo" => Ok(CallToolResult::text(
                    arguments.unwrap_or(Value::Null).to_string(),
                )),
                other => Err(Error::ToolNotFound(other.to_string())),
            }
        }
    }

    async fn run(input: &str) -> Vec<Value> {
        let server = Server::new("test", "0.0.0", EchoHandler);
        let (writer, mut output) = tokio::io::duplex(1 << 16);
        server.serve(input.as_bytes(), writer).await.unwrap();

        let mut text = String::new();
        output.read_to_string(&mut text).await.unwrap();
        text.lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn by_id(responses: &[Value], id: i64) -> &Value {
        responses.iter().find(|r| r["id"] == id).unwrap()
    }

    #[tokio::test]
    async fn initialize_and_list() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","clientInfo":{"name":"t"}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
        );
        let responses = run(input).await;
        assert_eq!(responses.len(), 2);

        let init = by_id(&responses, 1);
        assert_eq!(init["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(init["result"]["serverInfo"]["name"], "test");
        assert!(init["result"]["capabilities"]["tools"].is_object());

        let list = by_id(&responses, 2);
        assert_eq!(list["result"]["tools"][0]["name"], "echo");
        assert_eq!(list["result"]["tools"][0]["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn call_known_and_unknown_tools() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"echo","arguments":{"a":1}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"missing"}}"#,
            "\n",
        );
        let responses = run(input).await;

        let ok = by_id(&responses, 1);
        assert_eq!(ok["result"]["isError"], false);
        assert_eq!(ok["result"]["content"][0]["text"], r#"{"a":1}"#);

        let missing = by_id(&responses, 2);
        assert_eq!(missing["error"]["code"], crate::protocol::INVALID_PARAMS);
        assert!(missing.get("result").is_none());
    }

    #[tokio::test]
    async fn malformed_and_unknown_method() {
        let input = concat!(
            "{not json\n",
            r#"{"jsonrpc":"2.0","id":7,"method":"resources/list"}"#,
            "\n",
        );
        let responses = run(input).await;
        assert_eq!(responses.len(), 2);

        let parse = responses.iter().find(|r| r["id"].is_null()).unwrap();
        assert_eq!(parse["error"]["code"], PARSE_ERROR);

        let unknown = by_id(&responses, 7);
        assert_eq!(unknown["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn ping_and_bad_params() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"arguments":{}}}"#,
            "\n",
        );
        let responses = run(input).await;
        assert_eq!(by_id(&responses, 1)["result"], json!({}));
        assert_eq!(
            by_id(&responses, 2)["error"]["code"],
            crate::protocol::INVALID_PARAMS
        );
    }

    #[tokio::test]
    async fn oversized_line_is_skipped() {
        let mut input = "x".repeat(MAX_MESSAGE_SIZE + 10);
        input.push('\n');
        input.push_str(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#);
        input.push('\n');

        let responses = run(&input).await;
        assert_eq!(responses.len(), 2);

        let too_large = responses.iter().find(|r| r["id"].is_null()).unwrap();
        assert_eq!(too_large["error"]["code"], INVALID_REQUEST);
        assert_eq!(by_id(&responses, 1)["result"], json!({}));
    }

    #[tokio::test]
    async fn line_at_size_limit_is_read() {
        let request = r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#;
        let mut input = " ".repeat(MAX_MESSAGE_SIZE - request.len());
        input.push_str(request);
        input.push('\n');

        let responses = run(&input).await;
        assert_eq!(responses.len(), 1);
        assert_eq!(by_id(&responses, 1)["result"], json!({}));
    }

    #[tokio::test]
    async fn last_line_without_newline() {
        let responses = run(r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#).await;
        assert_eq!(by_id(&responses, 3)["result"], json!({}));
    }

    #[tokio::test]
    async fn null_id_gets_a_reply() {
        let input = concat!(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#, "\n");
        let responses = run(input).await;
        assert_eq!(responses.len(), 1);
        assert!(responses[0]["id"].is_null());
        assert_eq!(responses[0]["result"], json!({}));
    }

    #[tokio::test]
    async fn invalid_utf8_is_a_parse_error() {
        let server = Server::new("test", "0.0.0", EchoHandler);
        let (writer, mut output) = tokio::io::duplex(1 << 16);
        let input: &[u8] = b"\xff\xfe\n";
        server.serve(input, writer).await.unwrap();

        let mut text = String::new();
        output.read_to_string(&mut text).await.unwrap();
        let response: Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(response["error"]["code"], PARSE_ERROR);
    }
}
