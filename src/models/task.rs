use serde::{Deserialize, Deserializer, Serialize};

/// Cuadrante de la matriz de Eisenhower
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    /// Importante y urgente ("Do First")
    Iu,
    /// Importante, no urgente ("Schedule")
    Inu,
    /// Urgente, no importante ("Delegate")
    Niu,
    /// Ni importante ni urgente ("Eliminate")
    Ninu,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Iu, Quadrant::Inu, Quadrant::Niu, Quadrant::Ninu];

    pub fn from_flags(is_important: bool, is_urgent: bool) -> Self {
        match (is_important, is_urgent) {
            (true, true) => Quadrant::Iu,
            (true, false) => Quadrant::Inu,
            (false, true) => Quadrant::Niu,
            (false, false) => Quadrant::Ninu,
        }
    }

    pub fn is_important(self) -> bool {
        matches!(self, Quadrant::Iu | Quadrant::Inu)
    }

    pub fn is_urgent(self) -> bool {
        matches!(self, Quadrant::Iu | Quadrant::Niu)
    }

    pub fn code(self) -> &'static str {
        match self {
            Quadrant::Iu => "iu",
            Quadrant::Inu => "inu",
            Quadrant::Niu => "niu",
            Quadrant::Ninu => "ninu",
        }
    }

    /// ID del contenedor del cuadrante en `views/tasks.html`
    pub fn container_id(self) -> String {
        format!("tasks-{}", self.code())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Progress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Progress, TaskStatus::Completed];

    pub fn code(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Progress => "progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::Progress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        TaskStatus::ALL.into_iter().find(|s| s.code() == code)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(deserialize_with = "bool_from_int_or_bool")]
    pub is_important: bool,
    #[serde(deserialize_with = "bool_from_int_or_bool")]
    pub is_urgent: bool,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::from_flags(self.is_important, self.is_urgent)
    }
}

/// Cuerpo de `POST /tasks`
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub is_important: bool,
    pub is_urgent: bool,
    pub status: TaskStatus,
}

/// Cuerpo de `PUT /tasks/:id`; los campos ausentes conservan el valor del servidor
#[derive(Clone, PartialEq, Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_important: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_urgent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

// MySQL devuelve TINYINT(1) como 0/1
fn bool_from_int_or_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolLike {
        Bool(bool),
        Int(i64),
    }

    Ok(match BoolLike::deserialize(deserializer)? {
        BoolLike::Bool(b) => b,
        BoolLike::Int(i) => i != 0,
    })
}
