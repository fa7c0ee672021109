//! Unit tests for individual components

use docflow::{
    codec,
    config::Config,
    error::AppError,
    models::{ProcessResponse, SourceFile, DOC_MIME, DOCX_MIME},
    services::derive_output_name,
};
use std::env;

#[test]
fn test_codec_round_trip() {
    let payloads: Vec<Vec<u8>> = vec![
        b"plain ascii".to_vec(),
        vec![],
        vec![0u8, 255, 128, 7, 13, 10],
        (0u8..=255).collect(),
    ];

    for payload in payloads {
        let encoded = codec::encode(&payload);
        let decoded = codec::decode(&encoded).unwrap();
        assert_eq!(decoded, payload);
    }
}

#[test]
fn test_codec_output_is_plain_text() {
    // The encoded form must survive embedding in a JSON string.
    let encoded = codec::encode(&[0u8, 159, 146, 150]);
    assert!(encoded.is_ascii());
    let json = serde_json::json!({ "file": encoded });
    let round_tripped = json["file"].as_str().unwrap();
    assert_eq!(codec::decode(round_tripped).unwrap(), vec![0u8, 159, 146, 150]);
}

#[test]
fn test_codec_rejects_malformed_input() {
    // Wrong alphabet
    let err = codec::decode("not base64 at all!!!").unwrap_err();
    match err {
        AppError::DecodeError { .. } => {}
        other => panic!("Expected DecodeError, got {:?}", other),
    }

    // Truncated padding
    let mut encoded = codec::encode(b"some document bytes");
    encoded.pop();
    assert!(codec::decode(&encoded).is_err());
}

#[test]
fn test_output_name_derivation() {
    assert_eq!(derive_output_name("report.docx"), "processed_report.docx");
    assert_eq!(derive_output_name("letter.doc"), "processed_letter.doc");
    assert_eq!(derive_output_name("notes"), "processed_notes.docx");
    assert_eq!(
        derive_output_name("quarterly.report.docx"),
        "processed_quarterly.report.docx"
    );
    assert_eq!(derive_output_name("file."), "processed_file.docx");
}

#[test]
fn test_word_document_validation() {
    let docx = SourceFile::new("a.docx", DOCX_MIME, vec![1, 2, 3]);
    let doc = SourceFile::new("b.doc", DOC_MIME, vec![1, 2, 3]);
    let pdf = SourceFile::new("c.pdf", "application/pdf", vec![1, 2, 3]);

    assert!(docx.is_word_document());
    assert!(doc.is_word_document());
    assert!(!pdf.is_word_document());
    assert_eq!(docx.size(), 3);
}

#[test]
fn test_error_codes() {
    assert_eq!(AppError::MissingFile.error_code(), "MISSING_FILE");
    assert_eq!(
        AppError::MissingField { field: "fileData" }.error_code(),
        "MISSING_FIELD"
    );
    assert_eq!(AppError::validation("test").error_code(), "VALIDATION_ERROR");
    assert_eq!(
        AppError::BackendError {
            status: 500,
            reason: "Internal Server Error".to_string()
        }
        .error_code(),
        "BACKEND_ERROR"
    );
    assert_eq!(
        AppError::DecodeError {
            message: "bad".to_string()
        }
        .error_code(),
        "DECODE_ERROR"
    );
}

#[test]
fn test_error_status_codes() {
    use axum::http::StatusCode;

    assert_eq!(AppError::MissingFile.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        AppError::MissingField { field: "fileUrl" }.status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::DecodeError {
            message: "bad".to_string()
        }
        .status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::BackendError {
            status: 503,
            reason: "Service Unavailable".to_string()
        }
        .status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        AppError::FetchError { status: 404 }.status_code(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        AppError::FileTooLarge { size: 20, limit: 10 }.status_code(),
        StatusCode::PAYLOAD_TOO_LARGE
    );
}

#[test]
fn test_process_response_shape() {
    let response = ProcessResponse::new(
        "QUJD".to_string(),
        "processed_report.docx".to_string(),
        "report.docx".to_string(),
    );

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["file"], "QUJD");
    assert_eq!(json["isBase64"], true);
    assert_eq!(json["filename"], "processed_report.docx");
    assert_eq!(json["debug"]["originalFilename"], "report.docx");
}

#[test]
fn test_config_defaults() {
    env::remove_var("SERVER_HOST");
    env::remove_var("SERVER_PORT");
    env::remove_var("BACKEND_URL");
    env::remove_var("MAX_FILE_SIZE_MB");
    env::remove_var("REQUEST_TIMEOUT_SECONDS");

    let config = Config::from_env().unwrap();
    assert_eq!(config.server_host, "0.0.0.0");
    assert_eq!(config.server_port, 3000);
    assert_eq!(config.backend_url, "http://localhost:8000/upload/");
    assert_eq!(config.max_file_size_mb, 10);
    assert_eq!(config.request_timeout_seconds, 30);
}
