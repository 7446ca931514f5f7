// Archivo: schema.rs
// Propósito: validador de esquemas para la entrada externa. Convierte un
// `serde_json::Value` crudo en un tipo fuerte o en un error `Parsing` con
// la lista de problemas encontrados como contexto.
use crate::entities::{CustomerCreationPayload, CustomerId, CustomerUpdatePayload, UserId};
use outcome::{BaseError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Problema concreto detectado durante el parseo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
  pub path: Vec<String>,
  pub message: String,
}

/// Contrato del validador: `parse(raw) -> Result<T, Parsing>`.
pub trait Schema: DeserializeOwned {
  /// Comprobaciones de campo posteriores a la deserialización.
  fn issues(&self) -> Vec<Issue> {
    Vec::new()
  }

  fn parse(raw: &JsonValue) -> Result<Self> {
    let value: Self = serde_json::from_value(raw.clone()).map_err(|e| {
      let issues = vec![Issue { path: Vec::new(),
                                message: e.to_string() }];
      BaseError::parsing("Fallo al parsear.").with_cause(e).with_context(issues)
    })?;
    let issues = value.issues();
    if !issues.is_empty() {
      log::warn!("entrada rechazada: {} problema(s)", issues.len());
      return Err(BaseError::parsing("Fallo al parsear.").with_context(issues));
    }
    Ok(value)
  }
}

impl Schema for UserId {}

impl Schema for CustomerId {}

impl Schema for CustomerCreationPayload {
  fn issues(&self) -> Vec<Issue> {
    if self.name.trim().is_empty() {
      return vec![Issue { path: vec!["name".into()],
                          message: "name no puede estar vacío".into() }];
    }
    Vec::new()
  }
}

impl Schema for CustomerUpdatePayload {
  fn issues(&self) -> Vec<Issue> {
    match &self.name {
      Some(name) if name.trim().is_empty() => vec![Issue { path: vec!["name".into()],
                                                           message: "name no puede estar vacío".into() }],
      _ => Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use outcome::ErrorKind;
  use serde_json::json;

  #[test]
  fn parses_creation_payload() {
    let dto = CustomerCreationPayload::parse(&json!({"name": "Acme", "extra": 1})).unwrap();
    assert_eq!(dto.name, "Acme");
  }

  #[test]
  fn missing_field_is_a_parsing_error_with_issues() {
    let err = CustomerCreationPayload::parse(&json!({})).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parsing);
    let issues = err.context().and_then(|c| c.as_array()).expect("issues");
    assert_eq!(issues.len(), 1);
    assert!(issues[0]["message"].as_str().unwrap().contains("name"));
  }

  #[test]
  fn blank_name_is_reported_with_path() {
    let err = CustomerCreationPayload::parse(&json!({"name": "  "})).unwrap_err();
    assert_eq!(err.context(), Some(&json!([{"path": ["name"], "message": "name no puede estar vacío"}])));
  }

  #[test]
  fn update_payload_name_is_optional() {
    let dto = CustomerUpdatePayload::parse(&json!({})).unwrap();
    assert!(dto.name.is_none());
  }

  #[test]
  fn customer_id_from_path_param() {
    assert_eq!(CustomerId::parse(&json!(" x1 ")).unwrap().as_str(), "x1");
    assert!(CustomerId::parse(&json!("")).unwrap_err().is(ErrorKind::Parsing));
  }
}
