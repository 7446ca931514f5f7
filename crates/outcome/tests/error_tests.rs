use outcome::{ensure_error, only, BaseError, ErrorKind};
use serde_json::json;

#[test]
fn error_display_not_found() {
  let err = BaseError::not_found("Cliente no encontrado");
  assert!(format!("{err}").contains("NotFound"));
  assert!(format!("{err}").contains("Cliente no encontrado"));
}

#[test]
fn error_display_collision() {
  let err = BaseError::unexpected_collision("sin candidatos libres");
  assert!(format!("{err}").starts_with("UnexpectedCollision"));
}

#[test]
fn error_context_is_kept_as_json() {
  let err = BaseError::already_exists("duplicado").with_context(json!({"id": "abc"}));
  assert_eq!(err.context(), Some(&json!({"id": "abc"})));
}

#[test]
fn context_built_with_only() {
  let dto = json!({"userId": "u", "customerId": "c", "secret": "no"});
  let err = BaseError::not_found("nf").with_context(only(&dto, &["userId", "customerId"]));
  assert_eq!(err.context(), Some(&json!({"userId": "u", "customerId": "c"})));
}

#[test]
fn error_from_serde_json_is_parsing() {
  let serde_err: Result<serde_json::Value, _> = serde_json::from_str("not json");
  let err: BaseError = serde_err.unwrap_err().into();
  assert_eq!(err.kind(), ErrorKind::Parsing);
  assert!(err.cause().is_some());
}

#[test]
fn source_exposes_the_cause() {
  use std::error::Error;
  let inner = BaseError::unexpected("raíz");
  let outer = BaseError::action_failed("arriba").with_cause(inner);
  let source = outer.source().expect("source");
  assert_eq!(source.to_string(), "Unexpected: raíz");
}

#[test]
fn to_json_lists_causes() {
  let outer = BaseError::search_failed("arriba").with_cause(ensure_error(std::fmt::Error));
  let json = outer.to_json();
  assert_eq!(json["kind"], "SearchFailed");
  assert_eq!(json["causes"].as_array().unwrap().len(), 2);
}

#[test]
fn error_is_debug_and_clone() {
  let err = BaseError::parsing("x").with_context(json!([1, 2]));
  let copy = err.clone();
  let _ = format!("{copy:?}");
  assert_eq!(copy.kind(), err.kind());
}
