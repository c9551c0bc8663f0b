use crate::expense_repo::ExpenseRepoError::ExpenseNotFound;
use crate::expense_repo::{Expense, ExpenseRepo, ExpenseRepoError, NewExpense};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    expenses: BTreeMap<i32, Expense>,
    next_id: i32,
}

/// Keeps expenses in memory, ordered by id. Ids start at 1 like a `SERIAL` column.
pub struct MemExpenseRepo {
    state: RwLock<State>,
}

impl MemExpenseRepo {
    pub fn new() -> MemExpenseRepo {
        let state = State {
            expenses: BTreeMap::new(),
            next_id: 1,
        };
        MemExpenseRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemExpenseRepo {
    fn default() -> Self {
        MemExpenseRepo::new()
    }
}

#[async_trait]
impl ExpenseRepo for MemExpenseRepo {
    async fn create_expense(&self, new_expense: NewExpense) -> Result<Expense, ExpenseRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let expense = new_expense.to_expense(id);
        write_guard.expenses.insert(id, expense.clone());

        Ok(expense)
    }

    async fn get_expense(&self, expense_id: i32) -> Result<Expense, ExpenseRepoError> {
        let read_guard = self.read_lock()?;

        read_guard
            .expenses
            .get(&expense_id)
            .cloned()
            .ok_or(ExpenseNotFound(expense_id))
    }

    async fn get_all_expenses(&self) -> Result<Vec<Expense>, ExpenseRepoError> {
        let read_guard = self.read_lock()?;

        Ok(read_guard.expenses.values().cloned().collect())
    }

    async fn update_expense(
        &self,
        expense_id: i32,
        updated_expense: NewExpense,
    ) -> Result<Expense, ExpenseRepoError> {
        let mut write_guard = self.write_lock()?;

        let Some(expense) = write_guard.expenses.get_mut(&expense_id) else {
            return Err(ExpenseNotFound(expense_id));
        };
        *expense = updated_expense.to_expense(expense_id);

        Ok(expense.clone())
    }
}
