// Archivo: option.rs
// Propósito: operadores asíncronos sobre `Option`.
//
// `map`, `unwrap`, `unwrap_or` y `ok_or` (paso a `Result` cuando la ausencia
// debe convertirse en un fallo tipado) ya los provee `std::option::Option`.
use std::future::Future;

/// Extensión de `Option` con operadores que pueden suspender. Sobre `None`
/// la operación no se invoca.
pub trait OptionExt<T>: Sized {
    fn map_async<U, F, Fut>(self, op: F) -> impl Future<Output = Option<U>>
        where F: FnOnce(T) -> Fut,
              Fut: Future<Output = U>;

    fn and_then_async<U, F, Fut>(self, op: F) -> impl Future<Output = Option<U>>
        where F: FnOnce(T) -> Fut,
              Fut: Future<Output = Option<U>>;
}

impl<T> OptionExt<T> for Option<T> {
    async fn map_async<U, F, Fut>(self, op: F) -> Option<U>
        where F: FnOnce(T) -> Fut,
              Fut: Future<Output = U>
    {
        match self {
            Some(value) => Some(op(value).await),
            None => None,
        }
    }

    async fn and_then_async<U, F, Fut>(self, op: F) -> Option<U>
        where F: FnOnce(T) -> Fut,
              Fut: Future<Output = Option<U>>
    {
        match self {
            Some(value) => op(value).await,
            None => None,
        }
    }
}
