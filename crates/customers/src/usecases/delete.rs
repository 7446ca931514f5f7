// Archivo: delete.rs
// Propósito: caso de uso de borrado lógico de clientes.
use crate::entities::{Customer, CustomerId, UserId};
use crate::repository::CustomerRepository;
use chrono::Utc;
use log::debug;
use outcome::{BaseError, ErrorKind, Result, ResultExt};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDeletionCommand {
    pub user_id: UserId,
    pub customer_id: CustomerId,
}

/// Marca un cliente como borrado. Borrar uno ya borrado no hace nada.
///
/// Errores posibles: `SearchFailed`, `NotFound` y `ActionFailed`.
pub struct CustomerDeletion<R>
    where R: CustomerRepository
{
    repo: Arc<R>,
}

impl<R> CustomerDeletion<R> where R: CustomerRepository
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: CustomerDeletionCommand) -> Result<()> {
        let customer = self.repo
                           .find_by_id(&cmd.customer_id)
                           .await
                           .wrap_err(ErrorKind::SearchFailed, "Fallo la búsqueda del cliente a borrar")
                           .map_err(|e| e.with_context(&cmd))?
                           .ok_or_else(|| BaseError::not_found("Cliente no encontrado").with_context(&cmd))?;

        if customer.deleted {
            debug!("cliente {} ya estaba borrado", customer.id);
            return Ok(());
        }

        let deleted = Customer { deleted: true,
                                 updated_at: Utc::now(),
                                 updated_by: cmd.user_id.clone(),
                                 ..customer };
        self.repo
            .save(deleted)
            .await
            .wrap_err(ErrorKind::ActionFailed, "No se pudo borrar el cliente")
            .map_err(|e| e.with_context(&cmd))
    }
}
