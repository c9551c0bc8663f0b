use crate::error::HandlerError;
use crate::expense::body::ExpenseBody;
use actix_web::{get, post, put, web, HttpResponse, Responder};
use anyhow::Context;
use expense_repo::expense_repo::ExpenseRepo;
use std::sync::Arc;
use tracing::instrument;

/// Ids the database would refuse to compare against an integer column fail the request.
fn parse_expense_id(expense_id: &str) -> Result<i32, HandlerError> {
    expense_id
        .parse()
        .with_context(|| format!("Invalid expense id {:?}", expense_id))
        .map_err(HandlerError::Internal)
}

#[post("")]
#[instrument(skip(expense_repo, new_expense))]
pub async fn create_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    new_expense: ExpenseBody,
) -> Result<impl Responder, HandlerError> {
    let expense = expense_repo
        .create_expense(new_expense.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(expense))
}

#[get("/{expense_id}")]
#[instrument(skip(expense_repo))]
pub async fn get_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    expense_id: web::Path<String>,
) -> Result<impl Responder, HandlerError> {
    let expense_id = parse_expense_id(&expense_id)?;
    let expense = expense_repo.get_expense(expense_id).await?;
    Ok(HttpResponse::Ok().json(expense))
}

#[get("")]
#[instrument(skip(expense_repo))]
pub async fn get_all_expenses(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
) -> Result<impl Responder, HandlerError> {
    let expenses = expense_repo.get_all_expenses().await?;
    Ok(HttpResponse::Ok().json(expenses))
}

#[put("/{expense_id}")]
#[instrument(skip(expense_repo, updated_expense))]
pub async fn update_expense(
    expense_repo: web::Data<Arc<dyn ExpenseRepo>>,
    expense_id: web::Path<String>,
    updated_expense: ExpenseBody,
) -> Result<impl Responder, HandlerError> {
    let expense_id = parse_expense_id(&expense_id)?;
    let expense = expense_repo
        .update_expense(expense_id, updated_expense.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(expense))
}
