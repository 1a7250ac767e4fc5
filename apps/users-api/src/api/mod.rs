use axum::Router;

pub mod health;
pub mod users;

/// All versioned API routes, with state already baked into each
/// sub-router.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/v1/users", users::router(state))
}

/// The /ready route, kept separate from `routes` because it needs the
/// full `AppState` rather than a per-domain service.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
