use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado de corrección de una entrega
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Completed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Completed => "completed",
        }
    }
}

/// Estudiante que entrega la solución
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Examinee {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,
    pub assignment_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub marks: u32,
    #[serde(default)]
    pub pdf_link: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub examinee: Examinee,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub obtained_marks: Option<u32>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Submission {
    pub fn is_submitted_by(&self, email: Option<&str>) -> bool {
        matches!(email, Some(email) if !email.is_empty() && self.examinee.email.eq_ignore_ascii_case(email))
    }

    /// "42 / 60" o "— / 60" si aún no tiene nota
    pub fn score_label(&self) -> String {
        match self.obtained_marks {
            Some(obtained) => format!("{} / {}", obtained, self.marks),
            None => format!("— / {}", self.marks),
        }
    }
}

/// Cuerpo de `POST /submissions`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewSubmission {
    pub assignment_id: String,
    pub title: String,
    pub marks: u32,
    pub pdf_link: String,
    pub note: String,
    pub examinee: Examinee,
    pub status: SubmissionStatus,
    pub submitted_at: DateTime<Utc>,
}

/// Cuerpo de `PATCH /submissions/:id`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub obtained_marks: u32,
    pub feedback: String,
    pub status: SubmissionStatus,
}

/// Listados de entregas que se cachean por separado
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum SubmissionFilter {
    /// Pendientes de corregir (`/submited`)
    Pending,
    /// Entregas del estudiante (`/myAssignment`)
    ByExaminee(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_graded_submission() {
        let json = r#"{
            "_id": "s1",
            "assignmentId": "a1",
            "title": "Binary trees",
            "marks": 60,
            "pdfLink": "https://drive.example/sol.pdf",
            "note": "see page 2",
            "examinee": { "email": "bob@edusync.dev", "name": "Bob" },
            "status": "completed",
            "obtainedMarks": 42,
            "feedback": "good",
            "submittedAt": "2024-03-10T08:30:00Z"
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.status, SubmissionStatus::Completed);
        assert_eq!(submission.score_label(), "42 / 60");
        assert!(submission.is_submitted_by(Some("BOB@edusync.dev")));
        assert!(submission.submitted_at.is_some());
    }

    #[test]
    fn pending_submission_defaults() {
        let submission: Submission =
            serde_json::from_str(r#"{"_id":"s2","assignmentId":"a1","marks":10}"#).unwrap();
        assert_eq!(submission.status, SubmissionStatus::Pending);
        assert_eq!(submission.score_label(), "— / 10");
        assert!(!submission.is_submitted_by(None));
    }

    #[test]
    fn grade_serializes_lowercase_status() {
        let grade = Grade {
            obtained_marks: 8,
            feedback: "ok".into(),
            status: SubmissionStatus::Completed,
        };
        let json = serde_json::to_value(&grade).unwrap();
        assert_eq!(json["obtainedMarks"], 8);
        assert_eq!(json["status"], "completed");
    }
}
