//! Crate `outcome`: álgebra de éxito/fallo y taxonomía de errores
//!
//! Los contenedores son `std::result::Result` y `std::option::Option`; este
//! crate añade sus operadores asíncronos (`ResultExt`, `OptionExt`) y el
//! error base `BaseError`, cuyo discriminante `ErrorKind` es la única clave
//! de despacho para las capas superiores.
//!
//! Política de propagación:
//! - Cada capa resuelve el fallo localmente o lo re-envuelve como un tipo
//!   más específico conservando el original como causa (`wrap_err`).
//! - Las condiciones de dominio siempre viajan como `Err`; el pánico se
//!   reserva para `unwrap`/`unwrap_err` sobre la variante equivocada.
//!
//! Ejemplo rápido:
//! ```rust
//! use outcome::{ErrorKind, ResultExt};
//! let r: Result<u32, std::io::Error> = Err(std::io::Error::new(std::io::ErrorKind::Other, "io"));
//! let err = r.wrap_err(ErrorKind::SearchFailed, "búsqueda fallida").unwrap_err();
//! assert!(err.is(ErrorKind::SearchFailed));
//! assert!(err.cause().is_some());
//! ```
pub mod context;
pub mod errors;
pub mod option;
pub mod result;

pub use context::only;
pub use errors::*;
pub use option::OptionExt;
pub use result::ResultExt;
