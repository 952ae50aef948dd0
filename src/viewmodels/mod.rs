pub mod tasks_viewmodel;
pub mod finances_viewmodel;
pub mod admin_viewmodel;
pub mod auth_viewmodel;
pub mod profile_viewmodel;

pub use tasks_viewmodel::{TaskForm, TasksViewModel};
pub use finances_viewmodel::{FinanceSummary, FinancesViewModel, TransactionForm, ALL_CATEGORIES};
pub use admin_viewmodel::AdminViewModel;
pub use profile_viewmodel::ProfileForm;
