//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use b2b_wholesale::db::{DbPool, establish_connection_pool, run_migrations};
use b2b_wholesale::domain::product::{NewProduct, Product};
use b2b_wholesale::repository::{DieselRepository, ProductWriter};

const TEST_POOL_SIZE: u32 = 8;

/// Temporary migrated database used in integration tests.
pub struct TestDb {
    // Dropped before `dir` so connections close before the files go away.
    pool: DbPool,
    path: PathBuf,
    dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(format!("{name}.db"));
        let url = path.to_str().expect("Temporary path is not UTF-8.");

        let pool = establish_connection_pool(url, TEST_POOL_SIZE)
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb { pool, path, dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Insert a product with the given stock rules and unit price in cents.
pub fn seed_product(
    repo: &DieselRepository,
    min_qty: i32,
    main_quantity: i32,
    price_cents: i64,
) -> Product {
    let new_product = NewProduct::new("Basmati Rice", price_cents, min_qty, main_quantity)
        .with_brand("Paddy")
        .with_category("grains")
        .with_description("Long grain")
        .with_image("https://img.example.com/rice.png")
        .with_owner_email("seller@example.com");

    repo.create_product(&new_product).expect("seed product")
}
