use async_trait::async_trait;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

#[async_trait]
pub trait ExpenseRepo: Sync + Send {
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, ExpenseRepoError>;

    async fn get_expense(&self, expense_id: i32) -> Result<Expense, ExpenseRepoError>;

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError>;

    /// Overwrites every field of the expense. Concurrent updates of the same expense are not
    /// serialized; the last write wins.
    async fn update_expense(
        &self,
        expense_id: i32,
        updated_expense: NewExpense,
    ) -> Result<Expense, ExpenseRepoError>;
}

#[derive(Error, Debug)]
pub enum ExpenseRepoError {
    #[error("Expense with id {0} not found")]
    ExpenseNotFound(i32),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Expense {
    pub id: i32,
    pub title: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

impl Expense {
    pub const fn new(
        id: i32,
        title: String,
        amount: f64,
        note: String,
        tags: Vec<String>,
    ) -> Expense {
        Expense {
            id,
            title,
            amount,
            note,
            tags,
        }
    }
}

/// Request body for creating or updating an expense. Missing fields take their zero value and
/// an `id` in the body is ignored.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
#[serde(default)]
pub struct NewExpense {
    pub title: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
    pub note: String,
    pub tags: Vec<String>,
}

impl NewExpense {
    pub const fn new(title: String, amount: f64, note: String, tags: Vec<String>) -> NewExpense {
        NewExpense {
            title,
            amount,
            note,
            tags,
        }
    }

    pub fn to_expense(self, id: i32) -> Expense {
        Expense {
            id,
            title: self.title,
            amount: self.amount,
            note: self.note,
            tags: self.tags,
        }
    }
}

/// Whole amounts are written as JSON integers, so `79.0` goes out as `79`.
fn serialize_amount<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let amount = *amount;
    if amount.fract() == 0.0 && amount >= i64::MIN as f64 && amount < i64::MAX as f64 {
        serializer.serialize_i64(amount as i64)
    } else {
        serializer.serialize_f64(amount)
    }
}
