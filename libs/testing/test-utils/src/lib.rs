//! Test infrastructure shared across the domain crates.
//!
//! - `TestDataBuilder` produces deterministic fixture data from a seed
//! - `TestDatabase` (feature "postgres") starts a disposable container
//!   and applies the workspace migrations
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn creates_a_user_row() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let username = builder.username("main");
//!     let email = builder.email("main");
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Seeded generator for test fixtures.
///
/// Seeding from the test name keeps fixtures reproducible across runs while
/// still distinct between tests, so parallel tests against a shared store
/// never collide on names or ids.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Builder with an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Builder seeded from a hash of the test name, so each test gets
    /// stable but distinct data.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a deterministic UUID for testing
    pub fn user_id(&self) -> Uuid {
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        uuid_bytes[8..].copy_from_slice(&self.seed.rotate_left(17).to_le_bytes());
        Uuid::from_bytes(uuid_bytes)
    }

    /// Generate a unique username for testing
    ///
    /// Returns e.g. "test-user-12345-main".
    pub fn username(&self, suffix: &str) -> String {
        format!("test-user-{}-{}", self.seed, suffix)
    }

    /// Generate a unique email address for testing
    pub fn email(&self, suffix: &str) -> String {
        format!("test-{}-{}@example.com", self.seed, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.user_id(), builder2.user_id());
        assert_eq!(builder1.username("main"), builder2.username("main"));
        assert_eq!(builder1.email("main"), builder2.email("main"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.user_id(), builder2.user_id());
    }
}
