// Archivo: result.rs
// Propósito: operadores asíncronos y de re-envoltura sobre `Result`.
//
// `map`, `and_then`, `map_err`, `unwrap`, `unwrap_or`, `unwrap_err` y `ok`
// ya existen en `std::result::Result` con la semántica requerida (incluido
// el cortocircuito de `and_then` y el pánico de `unwrap`/`unwrap_err` sobre
// la variante equivocada). Aquí se añaden sus variantes asíncronas.
use crate::errors::{BaseError, ErrorKind};
use std::error::Error as StdError;
use std::future::Future;

/// Extensión de `Result` con operadores encadenables que pueden suspender.
///
/// Mismo contrato que `map`/`and_then`: si el receptor es `Err`, `op` no se
/// invoca y el error original se propaga intacto.
pub trait ResultExt<T, E>: Sized {
    /// Transforma el valor de éxito con una operación asíncrona.
    fn map_async<U, F, Fut>(self, op: F) -> impl Future<Output = Result<U, E>>
        where F: FnOnce(T) -> Fut,
              Fut: Future<Output = U>;

    /// Encadena un paso asíncrono que devuelve `Result`.
    fn and_then_async<U, F, Fut>(self, op: F) -> impl Future<Output = Result<U, E>>
        where F: FnOnce(T) -> Fut,
              Fut: Future<Output = Result<U, E>>;

    /// Re-envuelve el error como un `BaseError` más específico conservando
    /// el original como causa.
    fn wrap_err(self, kind: ErrorKind, message: impl Into<String>) -> Result<T, BaseError>
        where E: StdError + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    async fn map_async<U, F, Fut>(self, op: F) -> Result<U, E>
        where F: FnOnce(T) -> Fut,
              Fut: Future<Output = U>
    {
        match self {
            Ok(value) => Ok(op(value).await),
            Err(e) => Err(e),
        }
    }

    async fn and_then_async<U, F, Fut>(self, op: F) -> Result<U, E>
        where F: FnOnce(T) -> Fut,
              Fut: Future<Output = Result<U, E>>
    {
        match self {
            Ok(value) => op(value).await,
            Err(e) => Err(e),
        }
    }

    fn wrap_err(self, kind: ErrorKind, message: impl Into<String>) -> Result<T, BaseError>
        where E: StdError + Send + Sync + 'static
    {
        self.map_err(|e| BaseError::new(kind, message).with_cause(e))
    }
}
