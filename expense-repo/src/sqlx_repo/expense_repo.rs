use crate::expense_repo::ExpenseRepoError::ExpenseNotFound;
use crate::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use crate::sqlx_repo::SQLxRepo;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar};
use tracing::instrument;

// All columns are nullable, rows written by other clients may leave them empty.
#[derive(sqlx::FromRow)]
struct ExpenseEntry {
    id: i32,
    title: Option<String>,
    amount: Option<f64>,
    note: Option<String>,
    tags: Option<Vec<String>>,
}

impl From<ExpenseEntry> for Expense {
    fn from(value: ExpenseEntry) -> Self {
        Expense::new(
            value.id,
            value.title.unwrap_or_default(),
            value.amount.unwrap_or_default(),
            value.note.unwrap_or_default(),
            value.tags.unwrap_or_default(),
        )
    }
}

#[async_trait]
impl ExpenseRepo for SQLxRepo {
    #[instrument(skip(self, new_expense))]
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, ExpenseRepoError> {
        let id = query_scalar::<_, i32>(
            "INSERT INTO expenses (title, amount, note, tags) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(new_expense.title.as_str())
        .bind(new_expense.amount)
        .bind(new_expense.note.as_str())
        .bind(new_expense.tags.as_slice())
        .fetch_one(&self.pool)
        .await
        .context("Unable to insert expense")?;

        Ok(new_expense.to_expense(id))
    }

    #[instrument(skip(self))]
    async fn get_expense(&self, expense_id: i32) -> Result<Expense, ExpenseRepoError> {
        let expense_entry = query_as::<_, ExpenseEntry>(
            "SELECT id, title, amount, note, tags FROM expenses WHERE id = $1",
        )
        .bind(expense_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to get expense {}", expense_id))?;

        expense_entry
            .map(|e| e.into())
            .ok_or(ExpenseNotFound(expense_id))
    }

    #[instrument(skip(self))]
    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        let expense_entries =
            query_as::<_, ExpenseEntry>("SELECT id, title, amount, note, tags FROM expenses")
                .fetch_all(&self.pool)
                .await
                .context("Unable to get expenses")?;

        let expenses = expense_entries
            .into_iter()
            .map(|expense_entry| expense_entry.into())
            .collect();
        Ok(expenses)
    }

    #[instrument(skip(self, updated_expense))]
    async fn update_expense(
        &self,
        expense_id: i32,
        updated_expense: NewExpense,
    ) -> Result<Expense, ExpenseRepoError> {
        let result = query(
            "UPDATE expenses SET title = $1, amount = $2, note = $3, tags = $4 WHERE id = $5",
        )
        .bind(updated_expense.title.as_str())
        .bind(updated_expense.amount)
        .bind(updated_expense.note.as_str())
        .bind(updated_expense.tags.as_slice())
        .bind(expense_id)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Unable to update expense {}", expense_id))?;

        if result.rows_affected() == 0 {
            return Err(ExpenseNotFound(expense_id));
        }

        Ok(updated_expense.to_expense(expense_id))
    }
}
