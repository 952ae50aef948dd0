// ============================================================================
// FINANCES VIEWMODEL - Transacciones, resumen y filtro por categoría
// ============================================================================
// El filtro solo afecta a la lista; el resumen siempre cubre todo.
// ============================================================================

use crate::models::{Transaction, TransactionInput, TransactionType};

pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct FinanceSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Datos crudos del formulario
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TransactionForm {
    pub id: Option<i64>,
    pub description: String,
    pub amount: String,
    pub kind: String,
    pub category: String,
    pub date: String,
}

impl TransactionForm {
    pub fn modal_title(&self) -> &'static str {
        if self.id.is_some() { "Edit Transaction" } else { "Add New Transaction" }
    }

    /// Valida y convierte. `today` se usa si no se eligió fecha (`YYYY-MM-DD`).
    pub fn to_input(&self, today: &str) -> Result<TransactionInput, String> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0)
            .ok_or_else(|| "Please enter a valid amount.".to_string())?;

        let kind = TransactionType::from_code(self.kind.trim())
            .ok_or_else(|| "Please choose income or expense.".to_string())?;

        let category = self.category.trim();
        if category.is_empty() {
            return Err("Category is required.".to_string());
        }

        let date = self.date.trim();
        Ok(TransactionInput {
            kind,
            category: category.to_string(),
            amount,
            description: self.description.trim().to_string(),
            transaction_date: if date.is_empty() { today.to_string() } else { date.to_string() },
        })
    }
}

#[derive(Debug)]
pub struct FinancesViewModel {
    transactions: Vec<Transaction>,
    category_filter: String,
    pending_delete: Option<i64>,
}

impl Default for FinancesViewModel {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            category_filter: ALL_CATEGORIES.to_string(),
            pending_delete: None,
        }
    }
}

impl FinancesViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza la cache local. Si la categoría filtrada desapareció se vuelve a "all".
    pub fn set_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        if self.category_filter != ALL_CATEGORIES
            && !self.transactions.iter().any(|t| t.category == self.category_filter)
        {
            self.category_filter = ALL_CATEGORIES.to_string();
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn find(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn summary(&self) -> FinanceSummary {
        let total = |kind: TransactionType| -> f64 {
            self.transactions.iter().filter(|t| t.kind == kind).map(|t| t.amount).sum()
        };
        let income = total(TransactionType::Income);
        let expenses = total(TransactionType::Expense);
        FinanceSummary { income, expenses, balance: income - expenses }
    }

    /// Categorías únicas en orden de aparición
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for t in &self.transactions {
            if !seen.contains(&t.category.as_str()) {
                seen.push(&t.category);
            }
        }
        seen
    }

    pub fn category_filter(&self) -> &str {
        &self.category_filter
    }

    pub fn set_category_filter(&mut self, category: &str) {
        self.category_filter = if category.is_empty() { ALL_CATEGORIES.to_string() } else { category.to_string() };
    }

    pub fn filtered(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| self.category_filter == ALL_CATEGORIES || t.category == self.category_filter)
            .collect()
    }

    pub fn edit_form(&self, id: i64) -> Option<TransactionForm> {
        self.find(id).map(|t| TransactionForm {
            id: Some(t.id),
            description: t.description.clone().unwrap_or_default(),
            amount: t.amount.to_string(),
            kind: t.kind.code().to_string(),
            category: t.category.clone(),
            date: t
                .transaction_date
                .as_deref()
                .map(|d| d.chars().take(10).collect())
                .unwrap_or_default(),
        })
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn take_pending_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: i64, kind: TransactionType, category: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            kind,
            category: category.into(),
            amount,
            description: Some(format!("tx {}", id)),
            transaction_date: Some("2025-08-29T00:00:00.000Z".into()),
        }
    }

    fn vm() -> FinancesViewModel {
        let mut vm = FinancesViewModel::new();
        vm.set_transactions(vec![
            tx(101, TransactionType::Income, "Job", 2500.0),
            tx(102, TransactionType::Expense, "Food", 150.0),
            tx(103, TransactionType::Expense, "Education", 20.0),
            tx(104, TransactionType::Income, "Side Hustle", 500.0),
            tx(105, TransactionType::Expense, "Food", 25.0),
        ]);
        vm
    }

    #[test]
    fn summary_totals_income_and_expenses() {
        let summary = vm().summary();
        assert_eq!(summary.income, 3000.0);
        assert_eq!(summary.expenses, 195.0);
        assert_eq!(summary.balance, 2805.0);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        assert_eq!(vm().categories(), vec!["Job", "Food", "Education", "Side Hustle"]);
    }

    #[test]
    fn filter_narrows_list_but_not_summary() {
        let mut vm = vm();
        vm.set_category_filter("Food");
        let ids: Vec<i64> = vm.filtered().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![102, 105]);
        assert_eq!(vm.summary().income, 3000.0);

        vm.set_category_filter(ALL_CATEGORIES);
        assert_eq!(vm.filtered().len(), 5);
    }

    #[test]
    fn vanished_category_resets_filter() {
        let mut vm = vm();
        vm.set_category_filter("Education");
        vm.set_transactions(vec![tx(1, TransactionType::Income, "Job", 10.0)]);
        assert_eq!(vm.category_filter(), ALL_CATEGORIES);
    }

    #[test]
    fn form_rejects_non_positive_amounts() {
        let mut form = TransactionForm {
            amount: "0".into(),
            kind: "expense".into(),
            category: "Food".into(),
            ..Default::default()
        };
        assert_eq!(form.to_input("2025-09-01"), Err("Please enter a valid amount.".to_string()));
        form.amount = "abc".into();
        assert!(form.to_input("2025-09-01").is_err());

        form.amount = " 12.5 ".into();
        let input = form.to_input("2025-09-01").unwrap();
        assert_eq!(input.amount, 12.5);
        assert_eq!(input.transaction_date, "2025-09-01");
    }

    #[test]
    fn edit_form_trims_timestamp_to_date() {
        let form = vm().edit_form(102).unwrap();
        assert_eq!(form.date, "2025-08-29");
        assert_eq!(form.kind, "expense");
        assert_eq!(form.modal_title(), "Edit Transaction");
    }
}
