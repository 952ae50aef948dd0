// ============================================================================
// TASKS VIEWMODEL - Estado de la matriz de Eisenhower
// ============================================================================
// Se construye una vez por carga de la vista y se pasa explícitamente a las
// funciones de render/update.
// ============================================================================

use crate::models::{NewTask, Quadrant, Task, TaskStatus, TaskUpdate};

/// Datos del formulario de creación/edición
#[derive(Clone, PartialEq, Debug)]
pub struct TaskForm {
    pub id: Option<i64>,
    pub title: String,
    pub is_important: bool,
    pub is_urgent: bool,
}

impl TaskForm {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn modal_title(&self) -> &'static str {
        if self.is_edit() { "Edit Task" } else { "Add New Task" }
    }

    fn validated_title(&self) -> Result<String, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required.".to_string());
        }
        Ok(title.to_string())
    }

    /// Cuerpo de `POST /tasks` (las tareas nuevas empiezan en `todo`)
    pub fn to_new_task(&self) -> Result<NewTask, String> {
        Ok(NewTask {
            title: self.validated_title()?,
            is_important: self.is_important,
            is_urgent: self.is_urgent,
            status: TaskStatus::Todo,
        })
    }

    /// Cuerpo de `PUT /tasks/:id`
    pub fn to_update(&self) -> Result<TaskUpdate, String> {
        Ok(TaskUpdate {
            title: Some(self.validated_title()?),
            is_important: Some(self.is_important),
            is_urgent: Some(self.is_urgent),
            status: None,
        })
    }
}

#[derive(Default, Debug)]
pub struct TasksViewModel {
    tasks: Vec<Task>,
    pending_delete: Option<i64>,
}

impl TasksViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tareas de un cuadrante, en el orden del servidor
    pub fn in_quadrant(&self, quadrant: Quadrant) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.quadrant() == quadrant).collect()
    }

    pub fn create_form(&self) -> TaskForm {
        TaskForm { id: None, title: String::new(), is_important: true, is_urgent: true }
    }

    pub fn edit_form(&self, id: i64) -> Option<TaskForm> {
        self.find(id).map(|task| TaskForm {
            id: Some(task.id),
            title: task.title.clone(),
            is_important: task.is_important,
            is_urgent: task.is_urgent,
        })
    }

    /// Inserta o reemplaza con la versión que devolvió el servidor
    pub fn upsert(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.insert(0, task),
        }
    }

    pub fn set_status(&mut self, id: i64, status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.tasks.retain(|t| t.id != id);
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Id a borrar tras confirmar; limpia la confirmación pendiente
    pub fn take_pending_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }
}
