use axum::Router;
use domain_users::{PostgresUserRepository, UserService, handlers};
use std::sync::Arc;

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = Arc::new(PostgresUserRepository::new(state.db.clone()));
    let service = UserService::new(repository);
    handlers::router(service)
}
