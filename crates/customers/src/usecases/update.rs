// Archivo: update.rs
// Propósito: caso de uso de actualización (patch) de clientes.
use crate::entities::{Customer, CustomerId, CustomerUpdatePayload, UserId};
use crate::repository::CustomerRepository;
use chrono::Utc;
use outcome::{only, BaseError, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::Arc;

/// Datos de entrada de la actualización.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateCommand {
    pub user_id: UserId,
    pub customer_id: CustomerId,
    pub payload: CustomerUpdatePayload,
}

impl CustomerUpdateCommand {
    fn context(&self) -> JsonValue {
        only(self, &["userId", "customerId"])
    }
}

/// Actualiza un cliente existente.
///
/// Errores posibles: `SearchFailed`, `NotFound`, `AlreadyExists` (el nuevo
/// nombre pertenece a otro cliente) y `ActionFailed`.
pub struct CustomerUpdate<R>
    where R: CustomerRepository
{
    repo: Arc<R>,
}

impl<R> CustomerUpdate<R> where R: CustomerRepository
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, cmd: CustomerUpdateCommand) -> Result<()> {
        let customer = self.repo.find_by_id(&cmd.customer_id).await.map_err(|e| {
                           BaseError::search_failed("La búsqueda falló mientras se buscaba el cliente")
                               .with_cause(e)
                               .with_context(cmd.context())
                       })?;
        let customer = customer.ok_or_else(|| BaseError::not_found("Cliente no encontrado").with_context(cmd.context()))?;

        if let Some(name) = &cmd.payload.name {
            self.ensure_name_available(&cmd, &customer, name).await?;
        }

        let updated = Customer { name: cmd.payload.name.clone().unwrap_or(customer.name),
                                 updated_by: cmd.user_id.clone(),
                                 updated_at: Utc::now(),
                                 ..customer };
        self.repo.save(updated).await.map_err(|e| {
                                          BaseError::action_failed("Falló la actualización del cliente")
                                              .with_cause(e)
                                              .with_context(cmd.context())
                                      })
    }

    /// El nombre sólo está ocupado si lo tiene *otro* cliente; renombrar a
    /// su propio nombre actual no es un conflicto.
    async fn ensure_name_available(&self, cmd: &CustomerUpdateCommand, customer: &Customer, name: &str) -> Result<()> {
        let other = self.repo.find_by_name(name).await.map_err(|e| {
                        BaseError::search_failed("La búsqueda falló al verificar si el nuevo nombre está disponible")
                            .with_cause(e)
                            .with_context(only(cmd, &["userId"]))
                    })?;
        match other {
            Some(other) if other.id != customer.id => {
                let mut context = cmd.context();
                context["otherCustomer"] = serde_json::json!(other.id);
                Err(BaseError::already_exists("No se pudo actualizar el cliente. El nuevo nombre ya está en uso.")
                    .with_context(context))
            }
            _ => Ok(()),
        }
    }
}
