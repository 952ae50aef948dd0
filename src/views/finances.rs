// ============================================================================
// FINANCES VIEW - Resumen, lista filtrable y modal de transacciones
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{
    alert, check_radio, checked_radio_value, closest_data_id, closest_from_target,
    event_target_element, field_value, on_change, on_click, on_submit, require_element, reset_form,
    set_field_value, set_inner_html, set_text_content, show_by_id,
};
use crate::models::{Transaction, TransactionType};
use crate::services::{finance_service, ApiClient};
use crate::state::SessionState;
use crate::utils::html::{escape_html, format_money};
use crate::utils::storage::LocalStore;
use crate::viewmodels::{FinanceSummary, FinancesViewModel, TransactionForm, ALL_CATEGORIES};

pub fn render_summary(summary: &FinanceSummary) -> String {
    format!(
        concat!(
            "<div class=\"summary-card\"><h4>Total Income</h4><p class=\"income\">{}</p></div>",
            "<div class=\"summary-card\"><h4>Total Expenses</h4><p class=\"expenses\">{}</p></div>",
            "<div class=\"summary-card\"><h4>Balance</h4><p class=\"balance\">{}</p></div>"
        ),
        format_money(summary.income),
        format_money(summary.expenses),
        format_money(summary.balance),
    )
}

pub fn render_transaction(t: &Transaction) -> String {
    let (sign, amount_class) = match t.kind {
        TransactionType::Income => ('+', "income"),
        TransactionType::Expense => ('-', "expenses"),
    };
    format!(
        concat!(
            "<div class=\"transaction-item\" data-transaction-id=\"{id}\">",
            "<div class=\"transaction-info\"><span class=\"transaction-category\">{category}</span>",
            "<p class=\"transaction-description\">{description}</p></div>",
            "<div class=\"transaction-value\"><p class=\"{class}\">{sign}{amount}</p></div>",
            "<div class=\"transaction-actions\">",
            "<button class=\"btn-icon btn-edit\">✏️</button>",
            "<button class=\"btn-icon btn-delete\">🗑️</button>",
            "</div></div>"
        ),
        id = t.id,
        category = escape_html(&t.category),
        description = escape_html(t.description.as_deref().unwrap_or("")),
        class = amount_class,
        sign = sign,
        amount = format_money(t.amount),
    )
}

pub fn render_transactions(transactions: &[&Transaction]) -> String {
    if transactions.is_empty() {
        return "<p class=\"no-transactions\">No transactions found for this category.</p>".to_string();
    }
    transactions.iter().map(|t| render_transaction(t)).collect()
}

/// Opciones del filtro; la categoría activa queda seleccionada
pub fn render_category_options(vm: &FinancesViewModel) -> String {
    let option = |value: &str, label: &str| {
        let selected = if value == vm.category_filter() { " selected" } else { "" };
        format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_html(value),
            selected,
            escape_html(label)
        )
    };
    std::iter::once(option(ALL_CATEGORIES, "All Categories"))
        .chain(vm.categories().into_iter().map(|c| option(c, c)))
        .collect()
}

fn render_into(id: &str, html: &str) {
    match require_element(id) {
        Ok(el) => set_inner_html(&el, html),
        Err(_) => log::warn!("⚠️ [FINANCES] Falta #{}", id),
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

struct FinancesScreen {
    vm: RefCell<FinancesViewModel>,
    api: ApiClient,
}

impl FinancesScreen {
    fn render_all(&self) {
        let vm = self.vm.borrow();
        render_into("finance-summary", &render_summary(&vm.summary()));
        render_into("transaction-category-filter", &render_category_options(&vm));
        self.render_list(&vm);
    }

    fn render_list(&self, vm: &FinancesViewModel) {
        render_into("transaction-list", &render_transactions(&vm.filtered()));
    }

    async fn refresh(&self) {
        match finance_service::fetch_transactions(&self.api).await {
            Ok(transactions) => {
                log::info!("💰 [FINANCES] {} transacciones", transactions.len());
                self.vm.borrow_mut().set_transactions(transactions);
                self.render_all();
            }
            Err(e) => log::error!("❌ [FINANCES] Error obteniendo transacciones: {}", e),
        }
    }

    fn open_form(&self, form: &TransactionForm) {
        reset_form("transaction-form");
        set_field_value("transaction-id", &form.id.map(|id| id.to_string()).unwrap_or_default());
        set_field_value("transaction-description", &form.description);
        set_field_value("transaction-amount", &form.amount);
        set_field_value("transaction-category", &form.category);
        set_field_value("transaction-date", &form.date);
        if !form.kind.is_empty() {
            check_radio("type", &form.kind);
        }
        if let Ok(title) = require_element("transaction-modal-title") {
            set_text_content(&title, form.modal_title());
        }
        show_by_id("transaction-modal", true);
    }

    fn read_form(&self) -> TransactionForm {
        TransactionForm {
            id: field_value("transaction-id").and_then(|v| v.parse().ok()),
            description: field_value("transaction-description").unwrap_or_default(),
            amount: field_value("transaction-amount").unwrap_or_default(),
            kind: checked_radio_value("type").unwrap_or_default(),
            category: field_value("transaction-category").unwrap_or_default(),
            date: field_value("transaction-date").unwrap_or_default(),
        }
    }

    async fn save(&self, form: TransactionForm) {
        let input = match form.to_input(&today()) {
            Ok(input) => input,
            Err(message) => {
                alert(&message);
                return;
            }
        };

        let result = match form.id {
            Some(id) => finance_service::update_transaction(&self.api, id, &input).await,
            None => finance_service::create_transaction(&self.api, &input).await,
        };

        match result {
            Ok(_) => {
                self.refresh().await;
                show_by_id("transaction-modal", false);
            }
            Err(e) => {
                log::error!("❌ [FINANCES] Error guardando transacción: {}", e);
                alert("Could not save transaction.");
            }
        }
    }

    async fn confirm_delete(&self) {
        let pending = self.vm.borrow_mut().take_pending_delete();
        if let Some(id) = pending {
            match finance_service::delete_transaction(&self.api, id).await {
                Ok(_) => self.refresh().await,
                Err(e) => log::error!("❌ [FINANCES] Error borrando transacción {}: {}", id, e),
            }
        }
        show_by_id("delete-transaction-modal", false);
    }
}

/// Monta la vista de finanzas (llamado desde `views/finances.js`)
#[wasm_bindgen]
pub fn mount_finances_view() -> Result<(), JsValue> {
    log::info!("💰 [FINANCES] Montando vista");
    let session = SessionState::new(Rc::new(LocalStore));
    let screen = Rc::new(FinancesScreen {
        vm: RefCell::new(FinancesViewModel::new()),
        api: ApiClient::from_session(&session),
    });

    on_click(&require_element("add-transaction-btn")?, {
        let s = screen.clone();
        move |_| s.open_form(&TransactionForm::default())
    })?;

    on_click(&require_element("close-transaction-modal-btn")?, |_| show_by_id("transaction-modal", false))?;

    on_submit(&require_element("transaction-form")?, {
        let s = screen.clone();
        move || {
            let s = s.clone();
            let form = s.read_form();
            spawn_local(async move { s.save(form).await });
        }
    })?;

    on_click(&require_element("transaction-list")?, {
        let s = screen.clone();
        move |event| {
            let Some(id) = closest_data_id(&event, ".transaction-item", "data-transaction-id") else { return };
            if closest_from_target(&event, ".btn-edit").is_some() {
                let form = s.vm.borrow().edit_form(id);
                if let Some(form) = form {
                    s.open_form(&form);
                }
            } else if closest_from_target(&event, ".btn-delete").is_some() {
                s.vm.borrow_mut().request_delete(id);
                show_by_id("delete-transaction-modal", true);
            }
        }
    })?;

    on_change(&require_element("transaction-category-filter")?, {
        let s = screen.clone();
        move |_| {
            let category = field_value("transaction-category-filter").unwrap_or_default();
            s.vm.borrow_mut().set_category_filter(&category);
            s.render_list(&s.vm.borrow());
        }
    })?;

    on_click(&require_element("confirm-delete-transaction-btn")?, {
        let s = screen.clone();
        move |_| {
            let s = s.clone();
            spawn_local(async move { s.confirm_delete().await });
        }
    })?;

    on_click(&require_element("cancel-delete-transaction-btn")?, {
        let s = screen.clone();
        move |_| {
            s.vm.borrow_mut().cancel_delete();
            show_by_id("delete-transaction-modal", false);
        }
    })?;

    for modal_id in ["transaction-modal", "delete-transaction-modal"] {
        let s = screen.clone();
        on_click(&require_element(modal_id)?, move |event| {
            if event_target_element(&event).map(|el| el.id() == modal_id).unwrap_or(false) {
                if modal_id == "delete-transaction-modal" {
                    s.vm.borrow_mut().cancel_delete();
                }
                show_by_id(modal_id, false);
            }
        })?;
    }

    spawn_local(async move { screen.refresh().await });
    Ok(())
}
