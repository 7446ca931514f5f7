// Archivo: allocator.rs
// Propósito: asignación optimista de ids únicos sin depender de una
// restricción de unicidad del almacenamiento.
//
// Nota sobre concurrencia: la verificación en lote y el posterior `save`
// no son atómicos. Dos invocaciones concurrentes pueden ver el mismo
// candidato como libre; con 62^10 combinaciones la probabilidad es
// despreciable y el cierre de esa ventana corresponde al almacén.
use crate::entities::CustomerId;
use crate::id_generator::{AllocationPolicy, IdGenerator};
use crate::repository::CustomerRepository;
use log::{debug, warn};
use outcome::{BaseError, Result};
use serde_json::json;
use std::sync::Arc;

/// Asignador de ids: genera un lote de candidatos y resuelve exactamente
/// uno libre con una única consulta en lote.
#[derive(Clone)]
pub struct IdAllocator {
    generator: Arc<dyn IdGenerator>,
    policy: AllocationPolicy,
}

impl IdAllocator {
    pub fn new(generator: Arc<dyn IdGenerator>, policy: AllocationPolicy) -> Self {
        Self { generator,
               policy: AllocationPolicy { candidates: policy.candidates.max(1),
                                          ..policy } }
    }

    pub fn policy(&self) -> AllocationPolicy {
        self.policy
    }

    /// Devuelve el primer candidato (en orden de generación) que no existe
    /// en `repo`.
    ///
    /// Errores:
    /// - `SearchFailed` si la consulta en lote falla o viola su contrato
    ///   (longitud distinta), con los candidatos como contexto.
    /// - `UnexpectedCollision` si todos los candidatos ya están en uso; el
    ///   contexto es exactamente la lista de candidatos intentados.
    pub async fn allocate<R>(&self, repo: &R) -> Result<CustomerId>
        where R: CustomerRepository + ?Sized
    {
        let candidates: Vec<CustomerId> = (0..self.policy.candidates).map(|_| self.generator.generate()).collect();
        debug!("verificando {} candidato(s) de id", candidates.len());

        let found = repo.find_batch_by_ids(&candidates).await.map_err(|e| {
            BaseError::search_failed("Fallo la búsqueda de ids candidatos ya en uso")
                .with_cause(e)
                .with_context(json!({ "candidates": candidates }))
        })?;
        if found.len() != candidates.len() {
            return Err(BaseError::search_failed("La búsqueda en lote devolvió una cantidad inesperada de resultados")
                .with_context(json!({ "candidates": candidates, "returned": found.len() })));
        }

        match found.iter().position(Option::is_none) {
            Some(idx) => Ok(candidates[idx].clone()),
            None => {
                warn!("todos los candidatos colisionaron: {:?}", candidates);
                Err(BaseError::unexpected_collision("No se pudo generar un id de cliente único.").with_context(&candidates))
            }
        }
    }
}
