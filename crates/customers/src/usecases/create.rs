// Archivo: create.rs
// Propósito: caso de uso de creación de clientes.
//
// Pipeline lineal `verificar unicidad -> asignar id -> persistir`; cada
// etapa corta la cadena al primer fallo vía `and_then_async`.
use crate::allocator::IdAllocator;
use crate::entities::{Customer, CustomerCreationPayload, CustomerId, UserId};
use crate::repository::CustomerRepository;
use chrono::Utc;
use log::debug;
use outcome::{BaseError, ErrorKind, Result, ResultExt};
use serde_json::json;
use std::sync::Arc;

/// Crea clientes con un id asignado de forma optimista.
///
/// Errores posibles: `SearchFailed`, `AlreadyExists`, `UnexpectedCollision`
/// y `ActionFailed`.
pub struct CustomerCreation<R>
    where R: CustomerRepository
{
    repo: Arc<R>,
    allocator: IdAllocator,
}

impl<R> CustomerCreation<R> where R: CustomerRepository
{
    pub fn new(repo: Arc<R>, allocator: IdAllocator) -> Self {
        Self { repo, allocator }
    }

    /// Ejecuta la creación y devuelve el id asignado.
    pub async fn execute(&self, user_id: &UserId, dto: CustomerCreationPayload) -> Result<CustomerId> {
        self.ensure_name_is_free(&dto.name)
            .await
            .and_then_async(|()| self.allocator.allocate(self.repo.as_ref()))
            .await
            .and_then_async(|customer_id| self.persist(user_id, &dto, customer_id))
            .await
    }

    async fn ensure_name_is_free(&self, name: &str) -> Result<()> {
        debug!("verificando unicidad del nombre");
        let existing = self.repo
                           .find_by_name(name)
                           .await
                           .wrap_err(ErrorKind::SearchFailed, "Fallo la búsqueda del cliente")?;
        match existing {
            Some(other) => Err(BaseError::already_exists("El cliente ya existe").with_context(json!({ "id": other.id }))),
            None => Ok(()),
        }
    }

    async fn persist(&self, user_id: &UserId, dto: &CustomerCreationPayload, customer_id: CustomerId) -> Result<CustomerId> {
        debug!("persistiendo cliente {}", customer_id);
        let today = Utc::now();
        let customer = Customer { id: customer_id.clone(),
                                  name: dto.name.clone(),
                                  creation_date: today,
                                  created_by: user_id.clone(),
                                  deleted: false,
                                  updated_at: today,
                                  updated_by: user_id.clone() };
        self.repo
            .save(customer)
            .await
            .wrap_err(ErrorKind::ActionFailed, "El repositorio no pudo crear el cliente.")?;
        Ok(customer_id)
    }
}
