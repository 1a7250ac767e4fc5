/// State handed to every handler. Cloning is cheap, the connection is
/// an Arc around the pool.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
