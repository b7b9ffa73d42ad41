//! Repository adapters implementing the `UserRepository` port.

pub mod entities;
mod in_memory;
mod user_repository;

pub use in_memory::InMemoryUserRepository;
pub use user_repository::UserStore;
