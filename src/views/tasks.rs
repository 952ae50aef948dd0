// ============================================================================
// TASKS VIEW - Matriz de Eisenhower
// ============================================================================
// Render: funciones puras viewmodel → HTML.
// Mount: lo llama `views/tasks.js` cada vez que el loader inyecta la vista.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{
    alert, check_radio, checked_radio_value, closest_data_id, closest_from_target, event_target_element, field_value,
    on_change, on_click, on_submit, require_element, reset_form, set_field_value, set_inner_html,
    set_text_content, show_by_id, target_matches,
};
use crate::models::{Quadrant, Task, TaskStatus, TaskUpdate};
use crate::services::{task_service, ApiClient};
use crate::state::SessionState;
use crate::utils::html::escape_html;
use crate::utils::storage::LocalStore;
use crate::viewmodels::{TaskForm, TasksViewModel};

pub fn render_status_selector(task: &Task) -> String {
    let options: String = TaskStatus::ALL
        .iter()
        .map(|status| {
            let selected = if *status == task.status { " selected" } else { "" };
            format!("<option value=\"{}\"{}>{}</option>", status.code(), selected, status.label())
        })
        .collect();
    format!(
        "<select class=\"task-status-selector\" data-task-id=\"{}\">{}</select>",
        task.id, options
    )
}

pub fn render_task_card(task: &Task) -> String {
    format!(
        concat!(
            "<div class=\"task-card status-{status}\" data-task-id=\"{id}\">",
            "<div class=\"task-details\"><p>{title}</p>{selector}</div>",
            "<div class=\"task-actions\">",
            "<button class=\"btn-icon btn-edit\">✏️</button>",
            "<button class=\"btn-icon btn-delete\">🗑️</button>",
            "</div></div>"
        ),
        status = task.status.code(),
        id = task.id,
        title = escape_html(&task.title),
        selector = render_status_selector(task),
    )
}

pub fn render_quadrant(vm: &TasksViewModel, quadrant: Quadrant) -> String {
    vm.in_quadrant(quadrant).into_iter().map(render_task_card).collect()
}

fn render_matrix(vm: &TasksViewModel) {
    for quadrant in Quadrant::ALL {
        match require_element(&quadrant.container_id()) {
            Ok(container) => set_inner_html(&container, &render_quadrant(vm, quadrant)),
            Err(_) => log::warn!("⚠️ [TASKS] Falta #{}", quadrant.container_id()),
        }
    }
}

/// Estado de la pantalla mientras la vista está montada
struct TasksScreen {
    vm: RefCell<TasksViewModel>,
    api: ApiClient,
}

impl TasksScreen {
    async fn refresh(&self) {
        match task_service::fetch_tasks(&self.api).await {
            Ok(tasks) => {
                self.vm.borrow_mut().set_tasks(tasks);
                render_matrix(&self.vm.borrow());
            }
            Err(e) => log::error!("❌ [TASKS] Error obteniendo tareas: {}", e),
        }
    }

    fn open_form(&self, form: &TaskForm) {
        reset_form("task-form");
        set_field_value("task-id", &form.id.map(|id| id.to_string()).unwrap_or_default());
        set_field_value("task-title", &form.title);
        check_radio("importance", if form.is_important { "true" } else { "false" });
        check_radio("urgency", if form.is_urgent { "true" } else { "false" });
        if let Ok(title) = require_element("modal-title") {
            set_text_content(&title, form.modal_title());
        }
        show_by_id("task-modal", true);
    }

    fn read_form(&self) -> TaskForm {
        TaskForm {
            id: field_value("task-id").and_then(|v| v.parse().ok()),
            title: field_value("task-title").unwrap_or_default(),
            is_important: checked_radio_value("importance").as_deref() == Some("true"),
            is_urgent: checked_radio_value("urgency").as_deref() == Some("true"),
        }
    }

    async fn save(&self, form: TaskForm) {
        let result = match form.id {
            Some(id) => match form.to_update() {
                Ok(update) => task_service::update_task(&self.api, id, &update).await.map_err(|e| e.user_message()),
                Err(e) => Err(e),
            },
            None => match form.to_new_task() {
                Ok(new_task) => task_service::create_task(&self.api, &new_task).await.map_err(|e| e.user_message()),
                Err(e) => Err(e),
            },
        };

        match result {
            Ok(task) => {
                log::info!("✅ [TASKS] Tarea {} guardada", task.id);
                self.refresh().await;
                show_by_id("task-modal", false);
            }
            Err(message) => {
                log::error!("❌ [TASKS] Error guardando tarea: {}", message);
                alert(&format!("Could not save the task. {}", message));
            }
        }
    }

    async fn change_status(&self, id: i64, status: TaskStatus) {
        let update = TaskUpdate { status: Some(status), ..Default::default() };
        match task_service::update_task(&self.api, id, &update).await {
            Ok(_) => {
                self.vm.borrow_mut().set_status(id, status);
                self.refresh().await;
            }
            Err(e) => log::error!("❌ [TASKS] Error actualizando estado de {}: {}", id, e),
        }
    }

    async fn confirm_delete(&self) {
        let pending = self.vm.borrow_mut().take_pending_delete();
        if let Some(id) = pending {
            match task_service::delete_task(&self.api, id).await {
                Ok(_) => {
                    self.vm.borrow_mut().remove(id);
                    self.refresh().await;
                }
                Err(e) => log::error!("❌ [TASKS] Error borrando tarea {}: {}", id, e),
            }
        }
        show_by_id("delete-confirm-modal", false);
    }
}

/// Monta la vista de tareas (llamado desde `views/tasks.js`)
#[wasm_bindgen]
pub fn mount_tasks_view() -> Result<(), JsValue> {
    log::info!("📋 [TASKS] Montando vista");
    let session = SessionState::new(Rc::new(LocalStore));
    let screen = Rc::new(TasksScreen {
        vm: RefCell::new(TasksViewModel::new()),
        api: ApiClient::from_session(&session),
    });

    let s = screen.clone();
    on_click(&require_element("add-task-btn")?, move |_| {
        let form = s.vm.borrow().create_form();
        s.open_form(&form);
    })?;

    on_click(&require_element("close-modal-btn")?, |_| show_by_id("task-modal", false))?;

    let s = screen.clone();
    on_submit(&require_element("task-form")?, move || {
        let s = s.clone();
        let form = s.read_form();
        spawn_local(async move { s.save(form).await });
    })?;

    let matrix = require_element("task-matrix")?;
    let s = screen.clone();
    on_click(&matrix, move |event| {
        let Some(id) = closest_data_id(&event, ".task-card", "data-task-id") else { return };
        if closest_from_target(&event, ".btn-edit").is_some() {
            let form = s.vm.borrow().edit_form(id);
            match form {
                Some(form) => s.open_form(&form),
                None => log::warn!("⚠️ [TASKS] Tarea {} no está en la vista", id),
            }
        } else if closest_from_target(&event, ".btn-delete").is_some() {
            s.vm.borrow_mut().request_delete(id);
            show_by_id("delete-confirm-modal", true);
        }
    })?;

    let s = screen.clone();
    on_change(&matrix, move |event| {
        if !target_matches(&event, ".task-status-selector") {
            return;
        }
        let Some(id) = closest_data_id(&event, ".task-status-selector", "data-task-id") else { return };
        let status = event_target_element(&event)
            .and_then(|el| el.dyn_into::<web_sys::HtmlSelectElement>().ok())
            .and_then(|select| TaskStatus::from_code(&select.value()));
        if let Some(status) = status {
            let s = s.clone();
            spawn_local(async move { s.change_status(id, status).await });
        }
    })?;

    let s = screen.clone();
    on_click(&require_element("cancel-delete-btn")?, move |_| {
        s.vm.borrow_mut().cancel_delete();
        show_by_id("delete-confirm-modal", false);
    })?;

    let s = screen.clone();
    on_click(&require_element("confirm-delete-btn")?, move |_| {
        let s = s.clone();
        spawn_local(async move { s.confirm_delete().await });
    })?;

    // Click en el fondo del modal lo cierra
    for modal_id in ["task-modal", "delete-confirm-modal"] {
        let s = screen.clone();
        on_click(&require_element(modal_id)?, move |event| {
            let on_backdrop = event_target_element(&event)
                .map(|el| el.id() == modal_id)
                .unwrap_or(false);
            if on_backdrop {
                if modal_id == "delete-confirm-modal" {
                    s.vm.borrow_mut().cancel_delete();
                }
                show_by_id(modal_id, false);
            }
        })?;
    }

    spawn_local(async move { screen.refresh().await });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, title: &str, status: TaskStatus) -> Task {
        Task { id, title: title.into(), is_important: true, is_urgent: false, status }
    }

    #[test]
    fn card_marks_status_and_escapes_title() {
        let html = render_task_card(&task(5, "<script>x</script>", TaskStatus::Progress));
        assert!(html.starts_with("<div class=\"task-card status-progress\" data-task-id=\"5\">"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("<option value=\"progress\" selected>In Progress</option>"));
        assert!(html.contains("<option value=\"todo\">To Do</option>"));
    }

    #[test]
    fn quadrant_renders_only_its_tasks() {
        let mut vm = TasksViewModel::new();
        vm.set_tasks(vec![
            task(1, "schedule me", TaskStatus::Todo),
            Task { id: 2, title: "do first".into(), is_important: true, is_urgent: true, status: TaskStatus::Todo },
        ]);
        let html = render_quadrant(&vm, Quadrant::Inu);
        assert!(html.contains("schedule me"));
        assert!(!html.contains("do first"));
        assert!(render_quadrant(&vm, Quadrant::Ninu).is_empty());
    }
}
