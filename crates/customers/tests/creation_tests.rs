mod common;

use common::{customer, fixed_allocator, user};
use customers::{AllocationPolicy, CustomerCreation, CustomerCreationPayload, CustomerRepository, IdAllocator, InMemoryCustomerRepository,
                RandomIdGenerator, RepoOperation, ID_ALPHABET};
use outcome::{BaseError, ErrorKind};
use serde_json::json;
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};

fn payload(name: &str) -> CustomerCreationPayload {
  CustomerCreationPayload { name: name.into() }
}

#[tokio::test]
async fn existing_name_short_circuits_before_allocation() {
  let repo = Arc::new(InMemoryCustomerRepository::with_customers(vec![customer("EXISTING01", "Acme")]));
  let (generator, allocator) = fixed_allocator();
  let creation = CustomerCreation::new(repo.clone(), allocator);

  let err = assert_err!(creation.execute(&user("u1"), payload("Acme")).await);

  assert_eq!(err.kind(), ErrorKind::AlreadyExists);
  assert_eq!(err.context(), Some(&json!({"id": "EXISTING01"})));
  assert_eq!(generator.calls(), 0);
  assert_eq!(repo.calls(RepoOperation::FindBatchByIds), 0);
  assert_eq!(repo.calls(RepoOperation::Save), 0);
}

#[tokio::test]
async fn lookup_failure_is_search_failed() {
  let repo = Arc::new(InMemoryCustomerRepository::new());
  repo.fail_on(RepoOperation::FindByName, BaseError::unexpected("timeout"));
  let (generator, allocator) = fixed_allocator();
  let creation = CustomerCreation::new(repo.clone(), allocator);

  let err = assert_err!(creation.execute(&user("u1"), payload("Acme")).await);
  assert_eq!(err.kind(), ErrorKind::SearchFailed);
  assert!(err.cause().is_some());
  assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn end_to_end_creation_on_empty_store() {
  let repo = Arc::new(InMemoryCustomerRepository::new());
  let allocator = IdAllocator::new(Arc::new(RandomIdGenerator::from_entropy(10)), AllocationPolicy::default());
  let creation = CustomerCreation::new(repo.clone(), allocator);

  let id = assert_ok!(creation.execute(&user("u1"), payload("Acme")).await);

  assert_eq!(id.as_str().len(), 10);
  assert!(id.as_str().bytes().all(|b| ID_ALPHABET.contains(&b)));

  let stored = repo.find_by_name("Acme").await.unwrap().expect("stored customer");
  assert_eq!(stored.id, id);
  assert_eq!(stored.created_by, user("u1"));
  assert_eq!(stored.updated_by, user("u1"));
  assert_eq!(stored.creation_date, stored.updated_at);
  assert!(!stored.deleted);

  // un segundo intento con el mismo nombre ya choca
  let err = assert_err!(creation.execute(&user("u2"), payload("Acme")).await);
  assert_eq!(err.kind(), ErrorKind::AlreadyExists);
}

#[tokio::test]
async fn persist_failure_is_action_failed_with_the_store_error_as_cause() {
  let repo = Arc::new(InMemoryCustomerRepository::new());
  let store_error = BaseError::unexpected("disco lleno").with_context(json!({"table": "customers"}));
  repo.fail_on(RepoOperation::Save, store_error.clone());
  let (_, allocator) = fixed_allocator();
  let creation = CustomerCreation::new(repo.clone(), allocator);

  let err = assert_err!(creation.execute(&user("u1"), payload("Acme")).await);

  assert_eq!(err.kind(), ErrorKind::ActionFailed);
  let cause = err.cause().and_then(|c| c.downcast_ref::<BaseError>()).expect("cause is the store error");
  assert_eq!(cause.kind(), store_error.kind());
  assert_eq!(cause.message(), store_error.message());
  assert_eq!(cause.context(), store_error.context());
  assert_eq!(repo.calls(RepoOperation::Save), 1);
}

#[tokio::test]
async fn collision_prevents_persisting() {
  let repo = Arc::new(InMemoryCustomerRepository::with_customers(vec![customer("A", "a"),
                                                                      customer("B", "b"),
                                                                      customer("C", "c")]));
  let (_, allocator) = fixed_allocator();
  let creation = CustomerCreation::new(repo.clone(), allocator);

  let err = assert_err!(creation.execute(&user("u1"), payload("Acme")).await);
  assert_eq!(err.kind(), ErrorKind::UnexpectedCollision);
  assert_eq!(repo.calls(RepoOperation::Save), 0);
}

#[tokio::test]
async fn allocated_id_is_the_first_free_candidate() {
  let repo = Arc::new(InMemoryCustomerRepository::with_customers(vec![customer("A", "a")]));
  let (_, allocator) = fixed_allocator();
  let creation = CustomerCreation::new(repo.clone(), allocator);

  let id = assert_ok!(creation.execute(&user("u1"), payload("Beta")).await);
  assert_eq!(id.as_str(), "B");
  assert_eq!(repo.list().await.unwrap().len(), 2);
}
