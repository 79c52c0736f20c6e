use crate::models::{ExpenseRecord, ValidExpense};

/// In-memory expense list. Newest records sit at the front.
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<ExpenseRecord>,
    next_id: u64,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with two demo records.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (title, category, amount, date) in [
            ("Groceries", "Food", 55.2, "2026-02-10"),
            ("TTC", "Transport", 3.35, "2026-02-11"),
        ] {
            store.add(ValidExpense {
                title: title.to_string(),
                category: category.to_string(),
                amount,
                date: date.to_string(),
            });
        }
        store
    }

    pub fn list(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn add(&mut self, expense: ValidExpense) -> ExpenseRecord {
        let record = ExpenseRecord {
            id: self.next_id,
            title: expense.title,
            category: expense.category,
            amount: expense.amount,
            date: expense.date,
        };
        // ids are never handed out twice, even after deletes
        self.next_id = self.next_id.saturating_add(1);
        self.expenses.insert(0, record.clone());
        record
    }

    pub fn delete(&mut self, id: u64) -> Option<ExpenseRecord> {
        let idx = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(idx))
    }
}
