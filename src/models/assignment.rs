use serde::{Deserialize, Serialize};

/// Niveles de dificultad que entiende el backend
pub const LEVELS: [&str; 3] = ["easy", "medium", "hard"];

/// Creador de una tarea
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Creator {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

/// Tarea tal como la devuelve el backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub marks: u32,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub creator: Creator,
}

impl Assignment {
    /// Solo el creador puede editar o borrar
    pub fn is_created_by(&self, email: Option<&str>) -> bool {
        match email {
            Some(email) => !email.is_empty() && self.creator.email.eq_ignore_ascii_case(email),
            None => false,
        }
    }

    /// Fecha límite legible ("12 Mar 2024"); si no se puede parsear, se devuelve tal cual
    pub fn due_date_label(&self) -> String {
        let raw = self.due_date.trim();
        if let Ok(date) = chrono::DateTime::parse_from_rfc3339(raw) {
            return date.format("%d %b %Y").to_string();
        }
        if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date.format("%d %b %Y").to_string();
        }
        raw.to_string()
    }
}

/// Resultado paginado de `GET /assignments`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct AssignmentPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub result: Vec<Assignment>,
}

/// Cuerpo para crear o actualizar una tarea
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub title: String,
    pub description: String,
    pub marks: u32,
    pub thumbnail: String,
    pub level: String,
    pub due_date: String,
    pub creator: Creator,
}

impl From<&Assignment> for NewAssignment {
    fn from(assignment: &Assignment) -> Self {
        Self {
            title: assignment.title.clone(),
            description: assignment.description.clone(),
            marks: assignment.marks,
            thumbnail: assignment.thumbnail.clone(),
            level: assignment.level.clone(),
            due_date: assignment.due_date.clone(),
            creator: assignment.creator.clone(),
        }
    }
}

/// Respuesta genérica de escritura (insert/update/delete)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    #[serde(default)]
    pub acknowledged: bool,
    #[serde(default)]
    pub inserted_id: Option<String>,
    #[serde(default)]
    pub modified_count: Option<u64>,
    #[serde(default)]
    pub deleted_count: Option<u64>,
}

impl WriteResult {
    pub fn inserted(&self) -> bool {
        self.inserted_id.is_some()
    }

    pub fn modified(&self) -> bool {
        self.modified_count.unwrap_or(0) > 0
    }

    pub fn deleted(&self) -> bool {
        self.deleted_count.unwrap_or(0) > 0
    }
}
