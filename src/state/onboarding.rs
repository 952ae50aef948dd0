// ============================================================================
// ONBOARDING - Cuándo arrancar el tour de bienvenida
// ============================================================================
// El tour en sí lo dibuja una librería JS; aquí solo se decide si debe
// arrancar y se registra que terminó.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;

use crate::utils::constants::TUTORIAL_COMPLETED_KEY;
use crate::utils::storage::KeyValueStore;

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TourStep {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    pub text: &'static str,
    /// Selector CSS del elemento al que se ancla el paso
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_to: Option<&'static str>,
    /// Vista a la que hay que navegar antes de mostrar el paso
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<&'static str>,
}

/// Pasos del tour, en orden
pub fn tour_steps() -> Vec<TourStep> {
    vec![
        TourStep {
            id: "step-1-welcome",
            title: None,
            text: "Welcome to Wopu! 👋 Let's take a quick 2-minute tour of the main features.",
            attach_to: None,
            view: Some("tasks"),
        },
        TourStep {
            id: "step-2-add-task",
            title: Some("Creating a Task"),
            text: "Everything starts here. Click this button to open the form where you can add a new task.",
            attach_to: Some("#add-task-btn"),
            view: Some("tasks"),
        },
        TourStep {
            id: "step-3-quadrants",
            title: Some("The Eisenhower Matrix"),
            text: "Your tasks will appear in one of these four quadrants, helping you prioritize what to do first.",
            attach_to: Some("#task-matrix"),
            view: Some("tasks"),
        },
        TourStep {
            id: "step-4-status",
            title: Some("Updating Progress"),
            text: "You can easily update a task's status directly from the card. Completed tasks will be visually marked.",
            attach_to: Some(".task-status-selector"),
            view: Some("tasks"),
        },
        TourStep {
            id: "step-5-navigation",
            title: Some("Switching Views"),
            text: "Great! Now, let's check out the Finances section using the sidebar.",
            attach_to: Some("a[data-view=\"finances\"]"),
            view: Some("tasks"),
        },
        TourStep {
            id: "step-6-finance-summary",
            title: Some("Your Financial Snapshot"),
            text: "Here you can see a quick summary of your income, expenses, and current balance.",
            attach_to: Some("#finance-summary"),
            view: Some("finances"),
        },
        TourStep {
            id: "step-7-add-transaction",
            title: Some("Adding Transactions"),
            text: "Use this button to log a new income or expense. Keeping this updated is key!",
            attach_to: Some("#add-transaction-btn"),
            view: Some("finances"),
        },
        TourStep {
            id: "step-8-finish",
            title: Some("You're All Set!"),
            text: "That's it for the tour. You're ready to start organizing your life and finances. Enjoy!",
            attach_to: None,
            view: None,
        },
    ]
}

pub fn tour_steps_json() -> String {
    serde_json::to_string(&tour_steps()).unwrap_or_else(|_| "[]".to_string())
}

/// Flag "tour en curso" + flag persistido de tour completado
pub struct OnboardingState {
    store: Rc<dyn KeyValueStore>,
    running: Cell<bool>,
}

impl OnboardingState {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store, running: Cell::new(false) }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cualquier valor guardado cuenta como completado; solo la ausencia lo reabre
    pub fn is_completed(&self) -> bool {
        self.store.get_item(TUTORIAL_COMPLETED_KEY).is_some()
    }

    pub fn should_start(&self) -> bool {
        !self.is_running() && !self.is_completed()
    }

    /// Marca el tour como en curso si debe arrancar. Devuelve si arrancó.
    pub fn begin(&self) -> bool {
        if !self.should_start() {
            return false;
        }
        self.running.set(true);
        true
    }

    /// Tour completado o cancelado
    pub fn finish(&self) -> Result<(), String> {
        self.running.set(false);
        self.store.set_item(TUTORIAL_COMPLETED_KEY, "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn starts_once_until_finished() {
        let onboarding = OnboardingState::new(Rc::new(MemoryStore::new()));
        assert!(onboarding.begin());
        assert!(!onboarding.begin(), "already running");

        onboarding.finish().unwrap();
        assert!(!onboarding.is_running());
        assert!(onboarding.is_completed());
        assert!(!onboarding.begin());
    }

    #[test]
    fn completed_flag_blocks_the_tour() {
        let store = MemoryStore::new().with_item(TUTORIAL_COMPLETED_KEY, "true");
        let onboarding = OnboardingState::new(Rc::new(store));
        assert!(!onboarding.should_start());
    }

    #[test]
    fn any_stored_completion_value_blocks_the_tour() {
        for value in ["1", "yes", ""] {
            let store = MemoryStore::new().with_item(TUTORIAL_COMPLETED_KEY, value);
            let onboarding = OnboardingState::new(Rc::new(store));
            assert!(onboarding.is_completed(), "value {:?}", value);
            assert!(!onboarding.begin(), "value {:?}", value);
        }
    }

    #[test]
    fn steps_serialize_in_order() {
        let json: serde_json::Value = serde_json::from_str(&tour_steps_json()).unwrap();
        let ids: Vec<&str> = json.as_array().unwrap().iter().map(|s| s["id"].as_str().unwrap()).collect();
        assert_eq!(ids.first(), Some(&"step-1-welcome"));
        assert_eq!(ids.last(), Some(&"step-8-finish"));
        assert_eq!(json[1]["attachTo"], "#add-task-btn");
    }
}
