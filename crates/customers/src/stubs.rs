// Archivo: stubs.rs
// Propósito: implementaciones en memoria para pruebas y wiring rápido.
//
// Incluye un repositorio en memoria (`InMemoryCustomerRepository`) con fallos
// inyectables y contadores de llamadas, y un generador de ids con guion
// fijo (`FixedIdGenerator`). No son durables; se usan para demos o pruebas.
use crate::entities::{Customer, CustomerId};
use crate::id_generator::IdGenerator;
use crate::repository::CustomerRepository;
use async_trait::async_trait;
use outcome::{BaseError, Result};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Operaciones del repositorio, usadas para inyectar fallos y contar
/// llamadas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoOperation {
    FindByName,
    FindById,
    FindBatchByIds,
    Save,
    List,
}

/// Repositorio en memoria (no durable).
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    /// Clientes en orden de inserción.
    customers: Mutex<Vec<Customer>>,
    /// Error a devolver por operación, si hay alguno configurado.
    failures: Mutex<HashMap<RepoOperation, BaseError>>,
    /// Llamadas recibidas por operación.
    calls: Mutex<HashMap<RepoOperation, usize>>,
}

impl InMemoryCustomerRepository {
    /// Crea un repositorio vacío.
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea un repositorio pre-poblado.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self { customers: Mutex::new(customers),
               ..Self::default() }
    }

    /// Hace que `op` devuelva `error` hasta que se limpie con `clear_failure`.
    pub fn fail_on(&self, op: RepoOperation, error: BaseError) {
        self.failures.lock().unwrap_or_else(|e| e.into_inner()).insert(op, error);
    }

    pub fn clear_failure(&self, op: RepoOperation) {
        self.failures.lock().unwrap_or_else(|e| e.into_inner()).remove(&op);
    }

    /// Cantidad de llamadas recibidas por `op`.
    pub fn calls(&self, op: RepoOperation) -> usize {
        *self.calls
             .lock()
             .unwrap_or_else(|e| e.into_inner())
             .get(&op)
             .unwrap_or(&0)
    }

    /// Helper para mapear `Mutex::lock()` en un `Result` con un error
    /// `Unexpected`.
    fn lock<'a, T>(&'a self, m: &'a Mutex<T>) -> Result<MutexGuard<'a, T>> {
        m.lock().map_err(|e| BaseError::unexpected(format!("mutex envenenado: {:?}", e)))
    }

    /// Registra la llamada y devuelve el fallo configurado, si existe.
    fn enter(&self, op: RepoOperation) -> Result<()> {
        *self.lock(&self.calls)?.entry(op).or_insert(0) += 1;
        match self.lock(&self.failures)?.get(&op) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn find_by<P>(&self, pred: P) -> Result<Option<Customer>>
        where P: Fn(&Customer) -> bool
    {
        Ok(self.lock(&self.customers)?.iter().find(|c| pred(c)).cloned())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Customer>> {
        self.enter(RepoOperation::FindByName)?;
        self.find_by(|c| c.name == name)
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>> {
        self.enter(RepoOperation::FindById)?;
        self.find_by(|c| &c.id == id)
    }

    async fn find_batch_by_ids(&self, ids: &[CustomerId]) -> Result<Vec<Option<Customer>>> {
        self.enter(RepoOperation::FindBatchByIds)?;
        let customers = self.lock(&self.customers)?;
        Ok(ids.iter()
              .map(|id| customers.iter().find(|c| &c.id == id).cloned())
              .collect())
    }

    async fn save(&self, customer: Customer) -> Result<()> {
        self.enter(RepoOperation::Save)?;
        let mut customers = self.lock(&self.customers)?;
        match customers.iter_mut().find(|c| c.id == customer.id) {
            Some(slot) => *slot = customer,
            None => customers.push(customer),
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        self.enter(RepoOperation::List)?;
        Ok(self.lock(&self.customers)?.clone())
    }
}

/// Generador con guion fijo: devuelve los ids indicados en orden y vuelve a
/// empezar al agotarse. Cuenta cuántas veces se le pidió un id.
#[derive(Debug)]
pub struct FixedIdGenerator {
    ids: Vec<CustomerId>,
    calls: AtomicUsize,
}

impl FixedIdGenerator {
    /// Valida el guion con las mismas reglas que `CustomerId::new`; un id
    /// vacío o en blanco es un error `Parsing`.
    pub fn new<I, S>(ids: I) -> Result<Self>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let ids = ids.into_iter()
                     .enumerate()
                     .map(|(index, raw)| {
                         CustomerId::new(raw.as_ref()).map_err(|e| {
                                                          BaseError::parsing(e).with_context(json!({ "index": index }))
                                                      })
                     })
                     .collect::<Result<Vec<_>>>()?;
        Ok(Self { ids,
                  calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> CustomerId {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.ids.get(n % self.ids.len().max(1)) {
            Some(id) => id.clone(),
            None => CustomerId::from_generated(format!("fixed-{}", n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::entities::UserId;

    fn customer(id: &str, name: &str) -> Customer {
        let now = Utc::now();
        let user = UserId::new("u1").unwrap();
        Customer { id: CustomerId::new(id).unwrap(),
                   name: name.into(),
                   creation_date: now,
                   created_by: user.clone(),
                   deleted: false,
                   updated_at: now,
                   updated_by: user }
    }

    #[tokio::test]
    async fn batch_lookup_preserves_order_and_length() {
        let repo = InMemoryCustomerRepository::with_customers(vec![customer("B", "b")]);
        let ids: Vec<CustomerId> = ["A", "B", "C"].iter().map(|s| CustomerId::new(s).unwrap()).collect();
        let found = repo.find_batch_by_ids(&ids).await.unwrap();
        assert_eq!(found.len(), 3);
        assert!(found[0].is_none());
        assert_eq!(found[1].as_ref().unwrap().name, "b");
        assert!(found[2].is_none());
    }

    #[tokio::test]
    async fn save_upserts_by_id() {
        let repo = InMemoryCustomerRepository::new();
        repo.save(customer("A", "uno")).await.unwrap();
        repo.save(customer("A", "dos")).await.unwrap();
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "dos");
    }

    #[tokio::test]
    async fn injected_failures_are_returned_and_counted() {
        let repo = InMemoryCustomerRepository::new();
        repo.fail_on(RepoOperation::FindByName, BaseError::unexpected("db caída"));
        assert!(repo.find_by_name("x").await.is_err());
        repo.clear_failure(RepoOperation::FindByName);
        assert!(repo.find_by_name("x").await.unwrap().is_none());
        assert_eq!(repo.calls(RepoOperation::FindByName), 2);
        assert_eq!(repo.calls(RepoOperation::Save), 0);
    }

    #[test]
    fn fixed_generator_cycles_and_counts() {
        let g = FixedIdGenerator::new(["A", "B"]).unwrap();
        let got: Vec<String> = (0..3).map(|_| g.generate().to_string()).collect();
        assert_eq!(got, vec!["A", "B", "A"]);
        assert_eq!(g.calls(), 3);
    }

    #[test]
    fn fixed_generator_rejects_blank_ids() {
        let err = FixedIdGenerator::new(["A", "  "]).unwrap_err();
        assert_eq!(err.kind(), outcome::ErrorKind::Parsing);
        assert_eq!(err.context(), Some(&json!({ "index": 1 })));

        let trimmed = FixedIdGenerator::new([" B "]).unwrap();
        assert_eq!(trimmed.generate().as_str(), "B");
    }

    #[test]
    fn mutex_poisoning_returns_error() {
        use std::sync::Arc;
        use std::thread;

        let repo = Arc::new(InMemoryCustomerRepository::new());
        let r2 = repo.clone();
        let handle = thread::spawn(move || {
            let _g = r2.customers.lock().unwrap();
            panic!("force poison");
        });
        assert!(handle.join().is_err());

        let err = repo.find_by(|_| true).unwrap_err();
        assert_eq!(err.kind(), outcome::ErrorKind::Unexpected);
    }
}
