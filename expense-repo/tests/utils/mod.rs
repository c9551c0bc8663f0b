pub mod generator;

use expense_repo::expense_repo::ExpenseRepo;
use std::env;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub enum RepoType {
    SQLx,
    Mem,
}

/// Builds the repo under test. The SQLx repo needs a database, so it is only built when
/// `TEST_DATABASE_URL` is set.
pub async fn build_repo(repo_type: RepoType) -> Option<Arc<dyn ExpenseRepo>> {
    match repo_type {
        RepoType::SQLx => {
            let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
                info!("TEST_DATABASE_URL not set, skipping");
                return None;
            };
            let repo = expense_repo::sqlx_repo::create_repo(&database_url, 1)
                .await
                .unwrap();
            Some(Arc::new(repo))
        }
        RepoType::Mem => Some(expense_repo::mem_repo::create_repo()),
    }
}
