use nrx_core::errors::{ErrorInfo, NrxError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("tensor", "gammaDD")
        .with_context("dim", 3)
}

#[test]
fn config_error_surface() {
    let err = NrxError::Config(sample_info("loop-columns", "column length mismatch"));
    assert_eq!(err.code(), "loop-columns");
    assert_eq!(err.info().context_value("tensor"), Some("gammaDD"));
    assert_eq!(err.info().context_value("missing"), None);
}

#[test]
fn shape_error_surface() {
    let err = NrxError::dimension_mismatch("KDD", 3, 4);
    assert_eq!(err.code(), "dimension-mismatch");
    assert_eq!(err.info().context_value("expected"), Some("3"));
    assert_eq!(err.info().context_value("found"), Some("4"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = NrxError::Eval(sample_info("unbound-symbol", "missing binding").with_hint("bind x"));
    assert_eq!(
        err.to_string(),
        "evaluation failed: [unbound-symbol] missing binding {dim=3, tensor=gammaDD} (hint: bind x)"
    );
}

#[test]
fn display_without_context_is_bare() {
    let err = NrxError::Serde(ErrorInfo::new("json-deserialize", "eof"));
    assert_eq!(err.to_string(), "serialization failed: [json-deserialize] eof");
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = NrxError::Serde(sample_info("json", "bad payload"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Serde");
    assert_eq!(json["detail"]["code"], "json");
    assert_eq!(json["detail"]["context"]["dim"], "3");
    assert!(json["detail"].get("hint").is_none());
}
