// ============================================================================
// FORMS - Validación de formularios
// ============================================================================
// Los formularios guardan texto crudo de los inputs; `validate` produce el
// cuerpo tipado que se envía al backend o el primer error encontrado.
// ============================================================================

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{
    Assignment, AuthUser, Creator, Examinee, Grade, NewAssignment, NewSubmission, Submission,
    SubmissionStatus, LEVELS,
};
use crate::utils::constants::MIN_PASSWORD_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Marks must be a positive number")]
    InvalidMarks,

    #[error("Level must be one of easy, medium or hard")]
    InvalidLevel,

    #[error("Due date is required")]
    MissingDueDate,

    #[error("Email is required")]
    EmptyEmail,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Password must contain an uppercase letter")]
    PasswordMissingUppercase,

    #[error("Password must contain a lowercase letter")]
    PasswordMissingLowercase,

    #[error("A PDF link is required")]
    MissingPdfLink,

    #[error("Obtained marks must be a number")]
    InvalidObtainedMarks,

    #[error("Obtained marks cannot exceed {total}")]
    MarksExceedTotal { total: u32 },

    #[error("You cannot grade your own submission")]
    OwnSubmission,

    #[error("You must be signed in")]
    NotSignedIn,
}

fn creator_of(user: &AuthUser) -> Result<Creator, FormError> {
    let email = user.email.clone().ok_or(FormError::NotSignedIn)?;
    Ok(Creator {
        email,
        name: user.label(),
    })
}

// ============================================================================
// ASSIGNMENT
// ============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AssignmentForm {
    pub title: String,
    pub description: String,
    pub marks: String,
    pub thumbnail: String,
    pub level: String,
    pub due_date: String,
}

impl AssignmentForm {
    pub fn new() -> Self {
        Self {
            level: LEVELS[0].to_string(),
            ..Self::default()
        }
    }

    /// Precarga para /update/:id (la fecha se recorta a YYYY-MM-DD para el input)
    pub fn from_assignment(assignment: &Assignment) -> Self {
        Self {
            title: assignment.title.clone(),
            description: assignment.description.clone(),
            marks: assignment.marks.to_string(),
            thumbnail: assignment.thumbnail.clone(),
            level: assignment.level.clone(),
            due_date: assignment.due_date.chars().take(10).collect(),
        }
    }

    pub fn validate(&self, creator: &AuthUser) -> Result<NewAssignment, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::EmptyTitle);
        }
        let marks = self
            .marks
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|marks| *marks > 0)
            .ok_or(FormError::InvalidMarks)?;
        let level = self.level.trim().to_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(FormError::InvalidLevel);
        }
        let due_date = self.due_date.trim();
        if due_date.is_empty() {
            return Err(FormError::MissingDueDate);
        }

        Ok(NewAssignment {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            marks,
            thumbnail: self.thumbnail.trim().to_string(),
            level,
            due_date: due_date.to_string(),
            creator: creator_of(creator)?,
        })
    }
}

// ============================================================================
// CREDENTIALS
// ============================================================================

pub fn validate_password(password: &str) -> Result<(), FormError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(FormError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(FormError::PasswordMissingUppercase);
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(FormError::PasswordMissingLowercase);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SignUpForm {
    pub name: String,
    pub photo_url: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.email.trim().is_empty() {
            return Err(FormError::EmptyEmail);
        }
        validate_password(&self.password)
    }

    pub fn display_name(&self) -> Option<String> {
        Some(self.name.trim().to_string()).filter(|name| !name.is_empty())
    }

    pub fn photo_url(&self) -> Option<String> {
        Some(self.photo_url.trim().to_string()).filter(|url| !url.is_empty())
    }
}

// ============================================================================
// SUBMISSION
// ============================================================================

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SubmissionForm {
    pub pdf_link: String,
    pub note: String,
}

impl SubmissionForm {
    pub fn validate(
        &self,
        assignment: &Assignment,
        examinee: &AuthUser,
        submitted_at: DateTime<Utc>,
    ) -> Result<NewSubmission, FormError> {
        let pdf_link = self.pdf_link.trim();
        if pdf_link.is_empty() {
            return Err(FormError::MissingPdfLink);
        }
        let creator = creator_of(examinee)?;
        Ok(NewSubmission {
            assignment_id: assignment.id.clone(),
            title: assignment.title.clone(),
            marks: assignment.marks,
            pdf_link: pdf_link.to_string(),
            note: self.note.trim().to_string(),
            examinee: Examinee {
                email: creator.email,
                name: creator.name,
            },
            status: SubmissionStatus::Pending,
            submitted_at,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct GradeForm {
    pub obtained_marks: String,
    pub feedback: String,
}

impl GradeForm {
    pub fn validate(&self, submission: &Submission, grader_email: Option<&str>) -> Result<Grade, FormError> {
        if grader_email.is_none() {
            return Err(FormError::NotSignedIn);
        }
        if submission.is_submitted_by(grader_email) {
            return Err(FormError::OwnSubmission);
        }
        let obtained_marks = self
            .obtained_marks
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidObtainedMarks)?;
        if obtained_marks > submission.marks {
            return Err(FormError::MarksExceedTotal {
                total: submission.marks,
            });
        }
        Ok(Grade {
            obtained_marks,
            feedback: self.feedback.trim().to_string(),
            status: SubmissionStatus::Completed,
        })
    }
}
