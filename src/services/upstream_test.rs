use super::*;

#[test]
fn pdf_content_type_matches_with_parameters_and_case() {
    assert!(is_pdf_content_type("application/pdf"));
    assert!(is_pdf_content_type("Application/PDF; charset=binary"));
}

#[test]
fn non_pdf_content_types_are_detected() {
    assert!(!is_pdf_content_type("text/html"));
    assert!(!is_pdf_content_type("application/octet-stream"));
    assert!(!is_pdf_content_type(""));
}

#[test]
fn build_client_uses_config() {
    assert!(build_client(&RelayConfig::default()).is_ok());
}

#[test]
fn relay_error_messages() {
    assert_eq!(RelayError::MissingParameter.to_string(), "missing url parameter");
    assert_eq!(RelayError::UpstreamStatus { status: 404 }.to_string(), "upstream returned status 404");
}

#[tokio::test]
async fn fetch_document_rejects_unparsable_url() {
    let http = build_client(&RelayConfig::default()).unwrap();
    let err = fetch_document(&http, "not a url").await.unwrap_err();
    assert!(matches!(err, RelayError::UpstreamRequest(_)));
}
