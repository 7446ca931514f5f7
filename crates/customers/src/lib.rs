//! Crate `customers`: núcleo del registro de clientes
//!
//! Define las entidades (`Customer`, ids), el validador de esquemas, el
//! contrato del almacén `CustomerRepository` con una implementación en
//! memoria útil para pruebas (`InMemoryCustomerRepository`), la asignación
//! optimista de ids (`IdAllocator`) y los casos de uso de creación,
//! actualización y borrado lógico. `CustomerController` traduce sus errores
//! a respuestas.
//!
//! Diseño resumido:
//! - Propagación única: todos los casos de uso devuelven `outcome::Result`.
//! - Asignación optimista: N candidatos, una sola consulta en lote, el
//!   primero libre gana. La ventana entre verificación y `save` es un riesgo
//!   aceptado.
//! - El generador de ids siempre se inyecta.
//!
//! Ejemplo rápido:
//! ```rust
//! use customers::{CustomerCreation, IdAllocator, InMemoryCustomerRepository, RandomIdGenerator, AllocationPolicy};
//! use std::sync::Arc;
//! let repo = Arc::new(InMemoryCustomerRepository::new());
//! let allocator = IdAllocator::new(Arc::new(RandomIdGenerator::from_entropy(10)), AllocationPolicy::default());
//! let creation = CustomerCreation::new(repo, allocator);
//! ```
pub mod allocator;
pub mod config;
pub mod controller;
pub mod entities;
pub mod id_generator;
pub mod repository;
pub mod schema;
pub mod stubs;
pub mod usecases;

pub use allocator::IdAllocator;
pub use config::CustomersConfig;
pub use controller::{CustomerController, Reply};
pub use entities::*;
pub use id_generator::*;
pub use repository::CustomerRepository;
pub use schema::{Issue, Schema};
pub use stubs::*;
pub use usecases::*;
