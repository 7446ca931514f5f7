mod create;
mod delete;
mod update;

pub use create::CustomerCreation;
pub use delete::{CustomerDeletion, CustomerDeletionCommand};
pub use update::{CustomerUpdate, CustomerUpdateCommand};
