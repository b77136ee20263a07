//! Database implementations

pub mod contact_repository;
pub mod pool;

pub use contact_repository::MySqlContactRepository;
pub use pool::create_pool;
