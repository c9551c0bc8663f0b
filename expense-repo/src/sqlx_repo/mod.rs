mod expense_repo;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::{query, PgPool};
use tracing::{info, instrument};

const CREATE_EXPENSES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id SERIAL PRIMARY KEY,
        title TEXT,
        amount FLOAT,
        note TEXT,
        tags TEXT []
    )
"#;

pub struct SQLxRepo {
    pool: PgPool,
}

impl SQLxRepo {
    pub fn new(pool: PgPool) -> SQLxRepo {
        SQLxRepo { pool }
    }

    /// Waits for checked out connections to be returned, then closes the pool.
    pub async fn close(&self) {
        self.pool.close().await
    }
}

/// Connects to the database and makes sure the `expenses` table exists.
pub async fn create_repo(database_url: &str, max_pool_size: u32) -> Result<SQLxRepo, anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_pool_size)
        .connect(database_url)
        .await
        .context("Unable to connect to database")?;

    init_schema(&pool).await?;

    Ok(SQLxRepo::new(pool))
}

#[instrument(skip(pool))]
pub async fn init_schema(pool: &PgPool) -> Result<(), anyhow::Error> {
    query(CREATE_EXPENSES_TABLE)
        .execute(pool)
        .await
        .context("Unable to create expenses table")?;
    info!("expenses table ready");
    Ok(())
}
