//! End-to-end: orchestrator -> HTTP relay client -> relay server -> stub
//! processing backend.

use axum::extract::DefaultBodyLimit;
use axum::{http::StatusCode, routing::post, Router};

use docflow::handlers::build_router;
use docflow::models::{SourceFile, DOCX_MIME};
use docflow::orchestrator::{BatchOrchestrator, BatchState, RelayClient, SessionHistory};
use docflow::{AppState, Config};

const STUB_PROCESSED_BYTES: &[u8] = b"TRANSFORMED-BY-BACKEND";

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{}", addr)
}

async fn spawn_relay_with_stub_backend() -> String {
    let stub = Router::new().route("/upload/", post(|| async { STUB_PROCESSED_BYTES.to_vec() }));
    let backend_url = format!("{}/upload/", spawn(stub).await);

    let config = Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        backend_url,
        max_file_size_mb: 10,
        request_timeout_seconds: 5,
    };
    let app = build_router(AppState::new(config, reqwest::Client::new()))
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024));
    spawn(app).await
}

#[tokio::test]
async fn orchestrator_drives_the_http_relay() {
    let relay_addr = spawn_relay_with_stub_backend().await;
    let relay = RelayClient::new(format!("{}/api/process-word-file", relay_addr));
    let history = SessionHistory::new();
    let mut orchestrator = BatchOrchestrator::new(relay, history.clone());

    orchestrator
        .select_files(vec![
            SourceFile::new("report.docx", DOCX_MIME, b"first document".to_vec()),
            SourceFile::new("notes.docx", DOCX_MIME, b"second document".to_vec()),
        ])
        .unwrap();
    orchestrator.submit_batch().await.unwrap();

    assert_eq!(orchestrator.state(), BatchState::Complete);
    let names: Vec<_> = history.snapshot().iter().map(|a| a.name.clone()).collect();
    assert_eq!(names, vec!["processed_report.docx", "processed_notes.docx"]);

    // The downloaded artifact is exactly what the backend returned.
    let (bytes, name) = orchestrator.download(0).unwrap();
    assert_eq!(bytes, STUB_PROCESSED_BYTES.to_vec());
    assert_eq!(name, "processed_report.docx");
}

#[tokio::test]
async fn relay_error_bodies_reach_the_orchestrator() {
    let stub = Router::new().route(
        "/upload/",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let backend_url = format!("{}/upload/", spawn(stub).await);
    let config = Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        backend_url,
        max_file_size_mb: 10,
        request_timeout_seconds: 5,
    };
    let relay_addr = spawn(build_router(AppState::new(config, reqwest::Client::new()))).await;

    let relay = RelayClient::new(format!("{}/api/process-word-file", relay_addr));
    let mut orchestrator = BatchOrchestrator::new(relay, SessionHistory::new());

    orchestrator
        .select_files(vec![SourceFile::new(
            "report.docx",
            DOCX_MIME,
            b"document".to_vec(),
        )])
        .unwrap();

    let result = orchestrator.submit_batch().await;
    assert!(result.is_err());
    assert_eq!(orchestrator.state(), BatchState::Failed);
    // The relay's {"error": ...} message is carried through verbatim.
    assert!(orchestrator.last_error().unwrap().contains("500"));
}
