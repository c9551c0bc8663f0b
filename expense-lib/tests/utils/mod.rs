use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use expense_repo::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use rstest::*;
use tracing::info;
use tracing::Level;

macro_rules! build_app {
    ($repo:expr) => {{
        let app = App::new()
            .wrap(expense_lib::tracing::create_middleware())
            .configure(expense_lib::app_config_func($repo));
        tracing::info!("Built app");
        app
    }};
}

macro_rules! create_expense {
    (&$service:ident, $new_expense:expr) => {{
        let request = TestRequest::post()
            .uri("/expenses")
            .set_json(&$new_expense)
            .to_request();
        let response = test::call_service(&$service, request).await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::CREATED,
            "Got {} response when creating expense",
            response.status()
        );
        test::read_body_json(response).await
    }};
}

#[fixture]
#[once]
pub fn tracing_setup() -> () {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(Level::DEBUG)
        .init();
    info!("tracing initialized");
}

#[fixture]
pub fn repo() -> Arc<dyn ExpenseRepo> {
    expense_repo::mem_repo::create_repo()
}

#[allow(dead_code)]
pub fn strawberry_smoothie() -> NewExpense {
    NewExpense::new(
        "strawberry smoothie".to_string(),
        79.0,
        "night market promotion discount 10 bath".to_string(),
        vec!["food".to_string(), "beverage".to_string()],
    )
}

/// Repo whose every operation fails like an unreachable database.
#[allow(dead_code)]
pub struct FailingRepo;

#[async_trait]
impl ExpenseRepo for FailingRepo {
    async fn create_expense(&self, _new_expense: NewExpense) -> Result<Expense, ExpenseRepoError> {
        Err(anyhow!("connection refused").into())
    }

    async fn get_expense(&self, _expense_id: i32) -> Result<Expense, ExpenseRepoError> {
        Err(anyhow!("connection refused").into())
    }

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        Err(anyhow!("connection refused").into())
    }

    async fn update_expense(
        &self,
        _expense_id: i32,
        _updated_expense: NewExpense,
    ) -> Result<Expense, ExpenseRepoError> {
        Err(anyhow!("connection refused").into())
    }
}
