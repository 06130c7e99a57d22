//! The catalog served through the MCP loop, end to end.

use axum::Router;
use axum::routing::get;
use hub::{ApiConfig, Catalog};
use mcp::{INVALID_PARAMS, Server};
use serde_json::Value;
use tokio::io::AsyncReadExt;

async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/v2/access-tokens/{uuid}",
            get(|| async { r#"{"uuid":"abc","is_active":true}"# }),
        )
        .route(
            "/v2/auditlogs/{account}",
            get(|| async { (axum::http::StatusCode::FORBIDDEN, "forbidden") }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn exchange(input: &str) -> Vec<Value> {
    let base = spawn_upstream().await;
    let catalog = Catalog::new(ApiConfig::new(base).unwrap());
    let server = Server::new("hub-mcp", "0.0.0", catalog);

    let (writer, mut output) = tokio::io::duplex(1 << 20);
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
async fn lists_every_endpoint() {
    let responses = exchange(concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
        "\n"
    ))
    .await;
    let tools = by_id(&responses, 1)["result"]["tools"].as_array().unwrap().clone();
    assert_eq!(tools.len(), 19);

    let delete = tools
        .iter()
        .find(|t| t["name"] == "post_v2_namespaces_namespace_delete-images")
        .unwrap();
    assert_eq!(delete["inputSchema"]["properties"]["manifests"]["type"], "array");
    assert_eq!(delete["inputSchema"]["required"], serde_json::json!(["namespace"]));
}

#[tokio::test]
async fn tool_outcomes_map_to_is_error() {
    let responses = exchange(concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"get_v2_access-tokens_uuid","arguments":{"uuid":"abc"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_v2_access-tokens_uuid","arguments":{}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"get_v2_auditlogs_account","arguments":{"account":"acme"}}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"get_v2_nothing"}}"#,
        "\n",
    ))
    .await;
    assert_eq!(responses.len(), 4);

    let ok = &by_id(&responses, 1)["result"];
    assert_eq!(ok["isError"], false);
    assert_eq!(
        ok["content"][0]["text"],
        "{\n  \"uuid\": \"abc\",\n  \"is_active\": true\n}"
    );

    let missing = &by_id(&responses, 2)["result"];
    assert_eq!(missing["isError"], true);
    assert_eq!(missing["content"][0]["text"], "missing required parameter: uuid");

    let forbidden = &by_id(&responses, 3)["result"];
    assert_eq!(forbidden["isError"], true);
    assert_eq!(forbidden["content"][0]["text"], "API error: forbidden");

    let unknown = by_id(&responses, 4);
    assert_eq!(unknown["error"]["code"], INVALID_PARAMS);
}
