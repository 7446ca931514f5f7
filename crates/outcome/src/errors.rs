// Archivo: errors.rs
// Propósito: definir el error base (`BaseError`), su discriminante
// (`ErrorKind`) y el alias Result<T> usado por las APIs del workspace.
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Fallo de bajo nivel envuelto como causa. Es opaco: sólo se usa para
/// diagnóstico y nunca para decidir el control de flujo.
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Discriminante del error. Es la única clave sobre la que las capas
/// superiores pueden hacer `match`; nunca se inspecciona el mensaje.
///
/// - `NotFound`: la entidad referenciada no existe.
/// - `AlreadyExists`: se violaría una restricción de unicidad.
/// - `SearchFailed`: el colaborador de búsqueda falló (infraestructura).
/// - `Parsing`: la entrada externa no pasó la validación estructural.
/// - `UnexpectedCollision`: la asignación agotó todos los candidatos.
/// - `ActionFailed`: falló una mutación tras pasar las precondiciones.
/// - `Unexpected`: fallo no clasificado en su origen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
  NotFound,
  AlreadyExists,
  SearchFailed,
  Parsing,
  UnexpectedCollision,
  ActionFailed,
  Unexpected,
}

impl ErrorKind {
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::NotFound => "NotFound",
      Self::AlreadyExists => "AlreadyExists",
      Self::SearchFailed => "SearchFailed",
      Self::Parsing => "Parsing",
      Self::UnexpectedCollision => "UnexpectedCollision",
      Self::ActionFailed => "ActionFailed",
      Self::Unexpected => "Unexpected",
    }
  }

  /// Código HTTP con el que la frontera traduce este tipo de error.
  pub const fn http_status(&self) -> u16 {
    match self {
      Self::Parsing => 400,
      Self::NotFound => 404,
      Self::AlreadyExists => 422,
      Self::UnexpectedCollision => 503,
      Self::SearchFailed | Self::ActionFailed | Self::Unexpected => 500,
    }
  }
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error base del workspace.
///
/// Se construye en el punto donde se detecta el fallo y no se modifica
/// después: los métodos `with_*` sólo se usan durante la construcción.
/// `Clone` es barato porque la causa se comparte vía `Arc`.
#[derive(Error, Debug, Clone)]
#[error("{kind}: {message}")]
pub struct BaseError {
  kind: ErrorKind,
  message: String,
  #[source]
  cause: Option<Cause>,
  context: Option<JsonValue>,
}

impl BaseError {
  pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
    Self { kind,
           message: message.into(),
           cause: None,
           context: None }
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::NotFound, message)
  }

  pub fn already_exists(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::AlreadyExists, message)
  }

  pub fn search_failed(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::SearchFailed, message)
  }

  pub fn parsing(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::Parsing, message)
  }

  pub fn unexpected_collision(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::UnexpectedCollision, message)
  }

  pub fn action_failed(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::ActionFailed, message)
  }

  pub fn unexpected(message: impl Into<String>) -> Self {
    Self::new(ErrorKind::Unexpected, message)
  }

  /// Adjunta el fallo de bajo nivel que originó este error.
  pub fn with_cause<E>(self, cause: E) -> Self
    where E: StdError + Send + Sync + 'static
  {
    self.with_shared_cause(Arc::new(cause))
  }

  /// Igual que `with_cause` pero reutiliza una causa ya compartida, de modo
  /// que el objeto original se conserva (misma identidad).
  pub fn with_shared_cause(mut self, cause: Cause) -> Self {
    self.cause = Some(cause);
    self
  }

  /// Adjunta un payload serializable (identificadores, nunca secretos ni
  /// entidades completas). Si el payload no se puede serializar se guarda
  /// una descripción del fallo en su lugar.
  pub fn with_context<C: Serialize>(mut self, context: C) -> Self {
    let value = serde_json::to_value(context)
      .unwrap_or_else(|e| JsonValue::String(format!("[contexto no serializable: {}]", e)));
    self.context = Some(value);
    self
  }

  pub fn kind(&self) -> ErrorKind {
    self.kind
  }

  pub fn is(&self, kind: ErrorKind) -> bool {
    self.kind == kind
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn cause(&self) -> Option<&Cause> {
    self.cause.as_ref()
  }

  pub fn context(&self) -> Option<&JsonValue> {
    self.context.as_ref()
  }

  /// Recorre la cadena de causas, de la más cercana a la más profunda.
  pub fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
    let first: Option<&(dyn StdError + 'static)> = self.cause.as_deref().map(|c| c as &(dyn StdError + 'static));
    std::iter::successors(first, |e: &&(dyn StdError + 'static)| (*e).source())
  }

  /// Representación JSON apta para logs estructurados.
  pub fn to_json(&self) -> JsonValue {
    serde_json::json!({
      "kind": self.kind,
      "message": self.message,
      "context": self.context,
      "causes": self.causes().map(|c| c.to_string()).collect::<Vec<_>>(),
    })
  }
}

impl From<serde_json::Error> for BaseError {
  fn from(e: serde_json::Error) -> Self {
    Self::parsing(format!("JSON inválido: {}", e)).with_cause(e)
  }
}

/// Normaliza cualquier error a `BaseError`. Si ya lo es se devuelve tal
/// cual; si no, se envuelve como `Unexpected` conservando el original como
/// causa.
pub fn ensure_error<E>(error: E) -> BaseError
  where E: StdError + Send + Sync + 'static
{
  let boxed: Box<dyn StdError + Send + Sync> = Box::new(error);
  match boxed.downcast::<BaseError>() {
    Ok(base) => *base,
    Err(other) => BaseError::unexpected(other.to_string()).with_shared_cause(Arc::from(other)),
  }
}

/// Alias de resultado usado por las APIs del workspace.
pub type Result<T> = std::result::Result<T, BaseError>;
