use keylens::{
    config::DisplayMode,
    mcp::{
        KeylensMcpServer,
        types::{AnnotateFileParams, AnnotateTextParams},
    },
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{extract_tool_result_json, fixture_errors};

const SOURCE: &str = "fail(\"ERROR.NOT_FOUND\");\nwarn('WARN.SLOW', 'ERROR.MISSING');\n";

#[tokio::test]
async fn test_annotate_text_items() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    let params = Parameters(AnnotateTextParams {
        project_root_path: fixture.root(),
        text: SOURCE.to_string(),
        mode: None,
    });

    let result = server.annotate_text(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["mode"], "after");
    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(
        json_result["items"],
        json!([
            {
                "key": "ERROR.NOT_FOUND",
                "start": 5,
                "end": 22,
                "line": 1,
                "column": 6,
                "value": "Not found"
            },
            {
                "key": "WARN.SLOW",
                "start": 30,
                "end": 41,
                "line": 2,
                "column": 6,
                "value": "Slow"
            }
        ])
    );
    let rendered = json_result["rendered"].as_str().unwrap();
    assert!(rendered.contains("→ Not found"));
    assert!(rendered.contains("→ Slow"));
}

#[tokio::test]
async fn test_annotate_text_hover_mode() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    let params = Parameters(AnnotateTextParams {
        project_root_path: fixture.root(),
        text: SOURCE.to_string(),
        mode: Some(DisplayMode::Hover),
    });

    let result = server.annotate_text(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["mode"], "hover");
    assert_eq!(
        json_result["rendered"],
        "<text>:1:6 ERROR.NOT_FOUND\n  **Translation:** Not found\n\
         <text>:2:6 WARN.SLOW\n  **Translation:** Slow\n"
    );
}

#[tokio::test]
async fn test_annotate_text_without_keys() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    let params = Parameters(AnnotateTextParams {
        project_root_path: fixture.root(),
        text: "let x = 'lowercase.key';".to_string(),
        mode: None,
    });

    let result = server.annotate_text(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["items"], json!([]));
    assert_eq!(json_result["rendered"], "");
}

#[tokio::test]
async fn test_annotate_file_relative_path() {
    let fixture = fixture_errors().unwrap();
    fixture.write_file("src/app.ts", SOURCE).unwrap();
    let server = KeylensMcpServer::new();

    let params = Parameters(AnnotateFileParams {
        project_root_path: fixture.root(),
        file_path: "src/app.ts".to_string(),
        mode: Some(DisplayMode::Codelens),
    });

    let result = server.annotate_file(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    let rendered = json_result["rendered"].as_str().unwrap();
    assert!(rendered.starts_with("src/app.ts\n"));
    assert!(rendered.contains("Not found"));
}

#[tokio::test]
async fn test_annotate_file_missing() {
    let fixture = fixture_errors().unwrap();
    let server = KeylensMcpServer::new();

    let params = Parameters(AnnotateFileParams {
        project_root_path: fixture.root(),
        file_path: "src/missing.ts".to_string(),
        mode: None,
    });

    assert!(server.annotate_file(params).await.is_err());
}
