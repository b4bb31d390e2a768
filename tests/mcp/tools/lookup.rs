use keylens::mcp::{KeylensMcpServer, types::LookupKeyParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};

use crate::{McpTestFixture, extract_tool_result_json, fixture_errors};

async fn lookup(server: &KeylensMcpServer, fixture: &McpTestFixture, key: &str) -> Value {
    let params = Parameters(LookupKeyParams {
        project_root_path: fixture.root(),
        key: key.to_string(),
    });
    let result = server.lookup_key(params).await.unwrap();
    extract_tool_result_json(&result)
}

#[tokio::test]
async fn test_lookup_nested_key() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    let json_result = lookup(&server, &fixture, "ERROR.NOT_FOUND").await;

    assert_eq!(
        json_result,
        json!({ "key": "ERROR.NOT_FOUND", "found": true, "value": "Not found" })
    );
}

#[tokio::test]
async fn test_lookup_flat_entry_wins() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    let json_result = lookup(&server, &fixture, "FLAT.KEY").await;

    assert_eq!(json_result["value"], "Flat entry");
}

#[tokio::test]
async fn test_lookup_without_display_value() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    for key in ["ERROR.MISSING", "ERROR.EMPTY", "", "ERROR.", "LIST.5"] {
        let json_result = lookup(&server, &fixture, key).await;
        assert_eq!(json_result["found"], false, "key {:?}", key);
        assert!(json_result["value"].is_null(), "key {:?}", key);
    }
}

#[tokio::test]
async fn test_lookup_group_shows_compact_json() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    let json_result = lookup(&server, &fixture, "WARN").await;

    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["value"], r#"{"SLOW":"Slow"}"#);
}

#[tokio::test]
async fn test_lookup_string_list() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    assert_eq!(lookup(&server, &fixture, "LIST").await["value"], "a,b");
    assert_eq!(lookup(&server, &fixture, "LIST.1").await["found"], false);
}

#[tokio::test]
async fn test_translation_file_loaded_once_per_project() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    assert_eq!(lookup(&server, &fixture, "WARN.SLOW").await["value"], "Slow");

    fixture
        .write_json("i18n/en.json", &json!({ "WARN": { "SLOW": "Changed" } }))
        .unwrap();

    assert_eq!(lookup(&server, &fixture, "WARN.SLOW").await["value"], "Slow");
    assert_eq!(
        lookup(&KeylensMcpServer::new(), &fixture, "WARN.SLOW").await["value"],
        "Changed"
    );
}
