#![allow(dead_code)]

use chrono::Utc;
use customers::{AllocationPolicy, Customer, CustomerId, FixedIdGenerator, IdAllocator, UserId};
use std::sync::Arc;

pub fn user(id: &str) -> UserId {
  UserId::new(id).expect("user id")
}

pub fn customer_id(id: &str) -> CustomerId {
  CustomerId::new(id).expect("customer id")
}

pub fn customer(id: &str, name: &str) -> Customer {
  let now = Utc::now();
  Customer { id: customer_id(id),
             name: name.into(),
             creation_date: now,
             created_by: user("seed"),
             deleted: false,
             updated_at: now,
             updated_by: user("seed") }
}

/// Asignador con el guion ["A", "B", "C"] y la política por defecto.
pub fn fixed_allocator() -> (Arc<FixedIdGenerator>, IdAllocator) {
  let generator = Arc::new(FixedIdGenerator::new(["A", "B", "C"]).expect("script"));
  let allocator = IdAllocator::new(generator.clone(), AllocationPolicy::default());
  (generator, allocator)
}
