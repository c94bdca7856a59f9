//! Tests for brand guideline analysis against a local document host.

mod test_utils;

use axum::{Router, http::StatusCode, routing::get};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use placard_core::{ContentBlock, Role};
use placard_design::{BrandAnalyzer, GenerationSettings, HttpDocumentFetcher, PDF_MEDIA_TYPE};
use placard_error::{AnalysisErrorKind, FetchErrorKind, PlacardErrorKind};
use std::sync::Arc;
use std::time::Duration;
use test_utils::ScriptedDriver;

const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\n%%EOF";

/// Serves a fake guideline document and a missing path, returns the base URL.
async fn serve_documents() -> String {
    let app = Router::new()
        .route("/guide.pdf", get(|| async { PDF_BYTES }))
        .route(
            "/broken.pdf",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });
    format!("http://{}", addr)
}

fn analyzer(driver: Arc<ScriptedDriver>) -> BrandAnalyzer {
    let fetcher = HttpDocumentFetcher::new(Duration::from_secs(5)).expect("Fetcher");
    let settings = GenerationSettings::builder()
        .max_tokens(2048u32)
        .build()
        .expect("Settings");
    BrandAnalyzer::new(driver, fetcher, settings)
}

#[tokio::test]
async fn test_analyze_returns_prompt() {
    let base = serve_documents().await;
    let driver = Arc::new(ScriptedDriver::new());

    let prompt = analyzer(driver.clone())
        .analyze(&format!("{}/guide.pdf", base), Some("Acme"))
        .await
        .expect("Analysis failed");
    assert!(!prompt.is_empty());
    assert!(prompt.contains("Acme"));

    let request = driver.last_request();
    assert_eq!(*request.max_tokens(), Some(2048));
    assert!(
        request
            .system()
            .as_deref()
            .unwrap()
            .starts_with("You are a brand guidelines analyzer")
    );
    assert_eq!(request.messages().len(), 1);

    let message = &request.messages()[0];
    assert_eq!(*message.role(), Role::User);
    let placard_core::Content::Blocks(blocks) = message.content() else {
        panic!("Expected block content");
    };
    assert_eq!(
        blocks[0],
        ContentBlock::document(PDF_MEDIA_TYPE, STANDARD.encode(PDF_BYTES))
    );
    assert_eq!(
        blocks[1],
        ContentBlock::text(
            "Analyze this brand guideline document for Acme and create a structured system prompt that captures all key brand elements and usage rules."
        )
    );
}

#[tokio::test]
async fn test_analyze_without_brand_name() {
    let base = serve_documents().await;
    let driver = Arc::new(ScriptedDriver::new());

    analyzer(driver.clone())
        .analyze(&format!("{}/guide.pdf", base), None)
        .await
        .expect("Analysis failed");

    let note = driver.last_request().messages()[0].content().text();
    assert!(note.starts_with("Analyze this brand guideline document and create"));
}

#[tokio::test]
async fn test_missing_document_is_fetch_failure() {
    let base = serve_documents().await;
    let driver = Arc::new(ScriptedDriver::new());

    let err = analyzer(driver.clone())
        .analyze(&format!("{}/missing.pdf", base), Some("Acme"))
        .await
        .expect_err("Missing document should fail");

    assert!(err.is_external());
    match err.kind() {
        PlacardErrorKind::Analysis(e) => match &e.kind {
            AnalysisErrorKind::Fetch(fetch) => {
                assert!(matches!(fetch.kind, FetchErrorKind::Status { status: 404, .. }))
            }
            other => panic!("Expected fetch failure, got {}", other),
        },
        other => panic!("Expected analysis error, got {}", other),
    }
    assert!(err.detail().starts_with("Error analyzing brand guidelines:"));
    assert!(driver.requests().is_empty());
}

#[tokio::test]
async fn test_server_error_is_fetch_failure() {
    let base = serve_documents().await;
    let driver = Arc::new(ScriptedDriver::new());

    let err = analyzer(driver)
        .analyze(&format!("{}/broken.pdf", base), None)
        .await
        .unwrap_err();
    assert!(err.detail().contains("returned status 500"));
}

#[tokio::test]
async fn test_model_failure_is_analysis_failure() {
    let base = serve_documents().await;
    let driver = Arc::new(ScriptedDriver::new());
    driver.set_failing(true);

    let err = analyzer(driver)
        .analyze(&format!("{}/guide.pdf", base), Some("Acme"))
        .await
        .unwrap_err();

    assert!(err.is_external());
    assert!(matches!(
        err.kind(),
        PlacardErrorKind::Analysis(e) if matches!(e.kind, AnalysisErrorKind::Model(_))
    ));
    assert!(err.detail().contains("model unavailable"));
}

#[tokio::test]
async fn test_empty_analysis_is_analysis_failure() {
    let base = serve_documents().await;
    let driver = Arc::new(ScriptedDriver::new());
    driver.set_empty(true);

    let err = analyzer(driver)
        .analyze(&format!("{}/guide.pdf", base), Some("Acme"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        PlacardErrorKind::Analysis(e) if matches!(e.kind, AnalysisErrorKind::Model(_))
    ));
    assert!(err.detail().contains("returned an empty reply"));
}
