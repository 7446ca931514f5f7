// entities.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de usuario: cadena recortada y no vacía.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

/// Identificador de cliente: cadena recortada y no vacía.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CustomerId(String);

fn trimmed_non_empty(raw: &str, what: &str) -> Result<String, String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(format!("{} no puede estar vacío", what));
  }
  Ok(trimmed.to_string())
}

impl UserId {
  pub fn new(raw: &str) -> Result<Self, String> {
    trimmed_non_empty(raw, "userId").map(Self)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl CustomerId {
  pub fn new(raw: &str) -> Result<Self, String> {
    trimmed_non_empty(raw, "customerId").map(Self)
  }

  /// Construye un id recién generado; el generador garantiza que no está
  /// vacío ni tiene espacios.
  pub(crate) fn from_generated(raw: String) -> Self {
    Self(raw)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<String> for UserId {
  type Error = String;

  fn try_from(raw: String) -> Result<Self, Self::Error> {
    Self::new(&raw)
  }
}

impl TryFrom<String> for CustomerId {
  type Error = String;

  fn try_from(raw: String) -> Result<Self, Self::Error> {
    Self::new(&raw)
  }
}

impl From<UserId> for String {
  fn from(id: UserId) -> Self {
    id.0
  }
}

impl From<CustomerId> for String {
  fn from(id: CustomerId) -> Self {
    id.0
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl fmt::Display for CustomerId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Cliente persistido. El nombre es la clave natural (única por
/// convención de los casos de uso, no por el almacenamiento).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
  pub id: CustomerId,
  pub name: String,
  pub creation_date: DateTime<Utc>,
  pub created_by: UserId,
  pub deleted: bool,
  pub updated_at: DateTime<Utc>,
  pub updated_by: UserId,
}

/// Payload de creación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreationPayload {
  pub name: String,
}

/// Payload de actualización. Funciona como un patch: los campos ausentes
/// no se tocan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerUpdatePayload {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}
