// Archivo: repository.rs
// Propósito: definir el trait `CustomerRepository`, el contrato que debe
// cumplir cualquier almacenamiento de clientes (en memoria, SQL, etc.).
use crate::entities::{Customer, CustomerId};
use async_trait::async_trait;
use outcome::Result;

/// Contrato del almacén de registros consumido por los casos de uso.
///
/// Cada llamada es un punto de suspensión. El almacén es responsable de su
/// propia disciplina de serialización; los casos de uso no toman locks.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Busca un cliente por su clave natural (el nombre).
    async fn find_by_name(&self, name: &str) -> Result<Option<Customer>>;

    /// Busca un cliente por id.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>>;

    /// Búsqueda en lote. Debe preservar el orden y devolver exactamente un
    /// elemento por id de entrada; nunca mezcla ni falla parcialmente.
    async fn find_batch_by_ids(&self, ids: &[CustomerId]) -> Result<Vec<Option<Customer>>>;

    /// Inserta o reemplaza el cliente con el mismo id.
    async fn save(&self, customer: Customer) -> Result<()>;

    /// Lista todos los clientes (incluidos los borrados lógicamente).
    async fn list(&self) -> Result<Vec<Customer>>;
}
