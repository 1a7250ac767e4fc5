//! Users Domain
//!
//! This module provides a complete domain implementation for user management:
//! create, fetch (single/all), selective update, and existence-gated delete.
//!
//! Layered as handlers (HTTP surface) over a service (business rules,
//! id parsing) over a `UserRepository` trait with in-memory and
//! PostgreSQL implementations. `models` holds the entity and DTOs.
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//! use std::sync::Arc;
//!
//! let repository = Arc::new(InMemoryUserRepository::new());
//! let service = UserService::new(repository);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

mod postgres_repository_impl;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, UpdateUser, User, UserResponse};
pub use postgres_repository_impl::PostgresUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
